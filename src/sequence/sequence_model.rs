use serde::{Deserialize, Serialize};

use crate::page_object::page_object_model::PageObjectOperation;

/// One visit to a screen: the operations performed there and the screen
/// reached afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub screen: String,
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub operations: Vec<PageObjectOperation>,

    /// Screen of the next visit, or `screen` itself for the last visit
    pub destination: String,
}

impl Sequence {
    pub fn is_self_transition(&self) -> bool {
        self.screen == self.destination
    }
}

/// All screen visits of a single recording, in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SequencePath {
    pub name: String,
    pub sequences: Vec<Sequence>,
}

impl SequencePath {
    /// Screen history of the recording, one entry per visit.
    pub fn screen_names(&self) -> Vec<String> {
        self.sequences.iter().map(|s| s.screen.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
