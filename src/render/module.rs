use std::fmt;

/// A dashboard content pane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Overview,
    Crops,
    Market,
    Queries,
    Ideas,
    Schemes,
    Admin,
    /// Any name that is not one of the above. Renders a placeholder.
    NotFound(String),
}

impl ModuleId {
    /// The modules in sidebar order. `Admin` is listed but only linked for
    /// admin sessions.
    pub const ALL: [ModuleId; 7] = [
        ModuleId::Overview,
        ModuleId::Crops,
        ModuleId::Market,
        ModuleId::Queries,
        ModuleId::Ideas,
        ModuleId::Schemes,
        ModuleId::Admin,
    ];

    pub fn parse(name: &str) -> ModuleId {
        match name {
            "overview" => ModuleId::Overview,
            "crops" => ModuleId::Crops,
            "market" => ModuleId::Market,
            "queries" => ModuleId::Queries,
            "ideas" => ModuleId::Ideas,
            "schemes" => ModuleId::Schemes,
            "admin" => ModuleId::Admin,
            other => ModuleId::NotFound(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ModuleId::Overview => "overview",
            ModuleId::Crops => "crops",
            ModuleId::Market => "market",
            ModuleId::Queries => "queries",
            ModuleId::Ideas => "ideas",
            ModuleId::Schemes => "schemes",
            ModuleId::Admin => "admin",
            ModuleId::NotFound(name) => name,
        }
    }

    /// Header text: the name with its first letter capitalised.
    pub fn title(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ModuleId::Overview => "\u{1f4ca}",
            ModuleId::Crops => "\u{1f33e}",
            ModuleId::Market => "\u{1f6d2}",
            ModuleId::Queries => "\u{1f4ac}",
            ModuleId::Ideas => "\u{1f4a1}",
            ModuleId::Schemes => "\u{1f4dc}",
            ModuleId::Admin => "\u{1f6e1}\u{fe0f}",
            ModuleId::NotFound(_) => "",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The add/ask/submit/list dialogs, one per data module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    AddCrop,
    AskQuery,
    SubmitIdea,
    ListProduct,
}

impl Modal {
    /// The module whose view contains this dialog.
    pub fn module(&self) -> ModuleId {
        match self {
            Modal::AddCrop => ModuleId::Crops,
            Modal::AskQuery => ModuleId::Queries,
            Modal::SubmitIdea => ModuleId::Ideas,
            Modal::ListProduct => ModuleId::Market,
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            Modal::AddCrop => "cropModal",
            Modal::AskQuery => "queryModal",
            Modal::SubmitIdea => "ideaModal",
            Modal::ListProduct => "productModal",
        }
    }
}
