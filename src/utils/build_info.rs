/// Build metadata embedded by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

pub fn current() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("POCKET_LEDGER_BUILD_HASH"),
        timestamp: env!("POCKET_LEDGER_BUILD_TIMESTAMP"),
        target: env!("POCKET_LEDGER_BUILD_TARGET"),
        profile: env!("POCKET_LEDGER_BUILD_PROFILE"),
    }
}
