use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SyntaxNode;

/// A file-scope variable declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalVariable {
    pub name: String,
    /// Text of the declaration's type specifier, without declarator modifiers.
    pub type_text: String,
    pub declaration: SyntaxNode,
}

impl GlobalVariable {
    /// `name@type` key used to match extern declarations against definitions.
    #[must_use]
    pub fn signature_key(&self) -> String {
        format!("{}@{}", self.name, self.type_text)
    }
}

/// File-scope variables of one unit, split by storage class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalVariables {
    /// `extern` declarations without an initializer.
    pub externs: BTreeMap<String, GlobalVariable>,
    /// Every other file-scope variable, declared or initialized.
    pub definitions: BTreeMap<String, GlobalVariable>,
}
