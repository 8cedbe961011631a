use crate::models::LicenseRisk;

/// Classify a GitHub license key (`"mit"`, `"apache-2.0"`, ...) into a risk level.
///
/// GitHub keys are lowercase SPDX-like identifiers; `"other"` is used when the
/// license file was not recognised.
pub fn classify_key(key: &str) -> LicenseRisk {
    match key.trim().to_ascii_lowercase().as_str() {
        // Permissive
        "mit"
        | "mit-0"
        | "apache-2.0"
        | "bsd-2-clause"
        | "bsd-3-clause"
        | "bsd-3-clause-clear"
        | "bsd-4-clause"
        | "0bsd"
        | "isc"
        | "unlicense"
        | "zlib"
        | "bsl-1.0"
        | "cc0-1.0"
        | "cc-by-4.0"
        | "wtfpl"
        | "afl-3.0"
        | "ncsa"
        | "postgresql"
        | "artistic-2.0" => LicenseRisk::Permissive,

        // Weak copyleft
        "lgpl-2.1" | "lgpl-3.0" | "mpl-2.0" | "epl-1.0" | "epl-2.0" | "eupl-1.2" | "osl-3.0"
        | "ms-rl" | "cc-by-sa-4.0" => LicenseRisk::WeakCopyleft,

        // Strong copyleft
        "gpl-2.0" | "gpl-3.0" | "agpl-3.0" | "eupl-1.1" => LicenseRisk::StrongCopyleft,

        _ => LicenseRisk::Unknown,
    }
}
