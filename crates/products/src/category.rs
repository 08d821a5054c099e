use serde::{Deserialize, Serialize};

use stockly_core::Entity;

use crate::product::quoted;

/// Product category. Equality and hashing use `code` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl Category {
    /// Create an active category.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<impl Into<String>>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            description: description.map(Into::into),
            active: true,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Entity for Category {
    type Id = Option<String>;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

stockly_core::impl_identity_eq!(Category);

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Category{{code={}, name={}, description={}, active={}}}",
            quoted(self.code()),
            quoted(self.name()),
            quoted(self.description()),
            self.active
        )
    }
}
