/// Display configuration for one generation technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    /// Column name in the API's series points
    pub key: &'static str,
    pub label: &'static str,
    /// Fill colour (hex code)
    pub color: &'static str,
}

/// Stack order of the bar chart, bottom first.
pub const TECHNOLOGIES: &[Technology] = &[
    Technology {
        key: "coal",
        label: "Coal",
        color: "#4b5563",
    },
    Technology {
        key: "gas",
        label: "Gas",
        color: "#f97316",
    },
    Technology {
        key: "oil",
        label: "Oil",
        color: "#78350f",
    },
    Technology {
        key: "geothermal",
        label: "Geothermal",
        color: "#dc2626",
    },
    Technology {
        key: "hydro",
        label: "Hydro",
        color: "#2563eb",
    },
    Technology {
        key: "bioenergy",
        label: "Bioenergy",
        color: "#65a30d",
    },
    Technology {
        key: "wind",
        label: "Wind",
        color: "#06b6d4",
    },
    Technology {
        key: "solar",
        label: "Solar",
        color: "#facc15",
    },
    Technology {
        key: "storage",
        label: "Storage",
        color: "#7c3aed",
    },
    Technology {
        key: "other",
        label: "Other",
        color: "#9ca3af",
    },
];

pub fn technology_by_key(key: &str) -> Option<&'static Technology> {
    TECHNOLOGIES.iter().find(|t| t.key == key)
}
