use serde::{Deserialize, Serialize};

use super::lang::AdminLang;

/// Per-installation preferences of the admin UI, loaded once per session and
/// saved when the admin changes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    #[serde(default)]
    pub lang: AdminLang,
}
