// Presentation tables referenced by index from simulation entities.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub stroke: &'static str,
    pub fill: &'static str,
}

pub const PALETTE: [ColorTheme; 8] = [
    ColorTheme { stroke: "#FF6B6B", fill: "rgba(255,107,107,0.18)" },
    ColorTheme { stroke: "#FF9F43", fill: "rgba(255,159,67,0.18)" },
    ColorTheme { stroke: "#A29BFE", fill: "rgba(162,155,254,0.18)" },
    ColorTheme { stroke: "#00CEC9", fill: "rgba(0,206,201,0.18)" },
    ColorTheme { stroke: "#55EFC4", fill: "rgba(85,239,196,0.18)" },
    ColorTheme { stroke: "#FDCB6E", fill: "rgba(253,203,110,0.18)" },
    ColorTheme { stroke: "#E84393", fill: "rgba(232,67,147,0.18)" },
    ColorTheme { stroke: "#74B9FF", fill: "rgba(116,185,255,0.18)" },
];

pub const EXHAUST_COLORS: [&str; 4] = ["#FF9F43", "#FDCB6E", "#ffffff", "#FF6B6B"];

pub const HULL_COLORS: [&str; 4] = ["#74B9FF", "#A29BFE", "#ffffff", "#00CEC9"];

/// Portraits drawn inside asteroid silhouettes.
pub const HEADS: [&str; 5] = ["Boris", "Filipa", "Frank", "Simon", "Vincent"];

pub fn theme(index: usize) -> ColorTheme {
    PALETTE[index % PALETTE.len()]
}
