//! Common test utilities and helpers.
//!
//! Fixtures shared by the pipeline and CLI integration tests.
#![allow(dead_code)]

pub mod test_utils;

/// A `dumpbin /out:` listing covering plain, private, ordinal-only and
/// forwarded exports.
pub const SAMPLE_DUMP: &str = "
Dump of file widgets.dll

File Type: DLL

  Section contains the following exports for widgets.dll

    00000000 characteristics
    5F3A1B2C time date stamp
        0.00 version
           1 ordinal base
           6 number of functions
           5 number of names

    ordinal hint RVA      name

          1    0 00001000 CreateWidget
          2    1 00001010 DllCanUnloadNow
          3    2 00001020 DllGetClassObject
          4      00001030 [NONAME]
          5    3          AcquireWidgetLock (forwarded to KERNEL32.AcquireSRWLockExclusive)
          6    4 00001040 DestroyWidget

  Summary

        1000 .data
        1000 .rdata
        1000 .reloc
        1000 .text
";

/// Definition expected from [`SAMPLE_DUMP`].
pub const SAMPLE_DEF: &str = "EXPORTS
CreateWidget
DllCanUnloadNow PRIVATE
DllGetClassObject PRIVATE
AcquireWidgetLock
DestroyWidget
";

/// [`SAMPLE_DUMP`] cut off before the `Summary` section.
pub fn truncated_dump() -> String {
    let end = SAMPLE_DUMP.find("  Summary").unwrap();
    SAMPLE_DUMP[..end].to_string()
}
