//! Catalog behind the user dashboard: three sections of feature tiles, addressed by
//! the `?section=` query parameter.

/// A dashboard section; its [`id`](Section::id) is both the anchor and the query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    DataMapping,
    MasterDataManagement,
    ErrorCorrectionDetection,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::DataMapping,
        Section::MasterDataManagement,
        Section::ErrorCorrectionDetection,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::DataMapping => "data-mapping",
            Section::MasterDataManagement => "master-data-management",
            Section::ErrorCorrectionDetection => "error-correction-detection",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::DataMapping => "Data Mapping",
            Section::MasterDataManagement => "Master Data Management",
            Section::ErrorCorrectionDetection => "Error Correction & Detection",
        }
    }

    /// Shorter label used in the sidebar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::DataMapping => "Data Mapping",
            Section::MasterDataManagement => "Master Data Mgmt",
            Section::ErrorCorrectionDetection => "Error Detection",
        }
    }

    /// Parse a `section` query value. Unknown or empty values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|s| s.id() == value)
    }

    pub fn tiles(self) -> &'static [Tile] {
        match self {
            Section::DataMapping => DATA_MAPPING_TILES,
            Section::MasterDataManagement => MASTER_DATA_TILES,
            Section::ErrorCorrectionDetection => ERROR_CORRECTION_TILES,
        }
    }
}

const DATA_MAPPING_TILES: &[Tile] = &[
    Tile::inert(TileKind::Extract),
    Tile::inert(TileKind::Transform),
    Tile::inert(TileKind::Load),
];

const MASTER_DATA_TILES: &[Tile] = &[
    Tile::inert(TileKind::Dimensions),
    Tile::inert(TileKind::Information),
    Tile::inert(TileKind::Cube),
];

const ERROR_CORRECTION_TILES: &[Tile] = &[
    Tile {
        kind: TileKind::RuleConfigurations,
        action: TileAction::Open(Feature::RuleConfigurations),
    },
    Tile {
        kind: TileKind::DataValidation,
        action: TileAction::Open(Feature::DataValidations),
    },
    Tile {
        kind: TileKind::Connections,
        action: TileAction::Connections,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Extract,
    Transform,
    Load,
    Dimensions,
    Information,
    Cube,
    RuleConfigurations,
    DataValidation,
    Connections,
}

impl TileKind {
    pub fn label(self) -> &'static str {
        match self {
            TileKind::Extract => "Extract",
            TileKind::Transform => "Transform",
            TileKind::Load => "Load",
            TileKind::Dimensions => "Dimensions",
            TileKind::Information => "Information",
            TileKind::Cube => "Cube",
            TileKind::RuleConfigurations => "Rule Configurations",
            TileKind::DataValidation => "Data Validation",
            TileKind::Connections => "Connections",
        }
    }
}

/// What clicking a tile does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    None,
    Open(Feature),
    Connections,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub action: TileAction,
}

impl Tile {
    const fn inert(kind: TileKind) -> Self {
        Self {
            kind,
            action: TileAction::None,
        }
    }
}

/// Feature areas with their own (not yet built) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    RuleConfigurations,
    DataValidations,
}

impl Feature {
    pub fn path(self) -> &'static str {
        match self {
            Feature::RuleConfigurations => "/rule-configurations",
            Feature::DataValidations => "/data-validations",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Feature::RuleConfigurations => "Rule Configurations",
            Feature::DataValidations => "Data Validations",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::RuleConfigurations => {
                "Define the rules used to detect and correct errors in synchronized data."
            }
            Feature::DataValidations => {
                "Run validation checks against mapped data before it is loaded."
            }
        }
    }
}
