use serde::{Deserialize, Serialize};

/// A financial account snapshot: identity plus the current (starting)
/// balance the projection rolls forward from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub balance: f64,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
        }
    }
}
