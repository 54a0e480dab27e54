use serde::{Deserialize, Serialize};

/// One vocabulary entry as delivered by the word data layer.
///
/// Field names serialize in the camelCase form the JSON and spreadsheet
/// exports use. The deck and shuffler never look inside this type; it is
/// simply the element type the host application studies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub level: String,
    pub last_reviewed: String,
}
