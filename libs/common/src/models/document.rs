//! Root document persisted by the store

use serde::{Deserialize, Serialize};

use super::Class;

/// All classes and their histories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl Document {
    pub fn find_class(&self, id: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id.as_str() == id)
    }

    pub fn find_class_mut(&mut self, id: &str) -> Option<&mut Class> {
        self.classes.iter_mut().find(|c| c.id.as_str() == id)
    }
}
