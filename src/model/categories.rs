/// Built-in chest X-ray label space with clinical weights.
///
/// Order matches the classifier output order and is the tie-break order for
/// findings with equal probability.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub weight: f64,
}

pub const DEFAULT_WEIGHT: f64 = 0.6;

const CHEST_CATEGORIES: &[CategoryDef] = &[
    CategoryDef { name: "Atelectasis", weight: 0.8 },
    CategoryDef { name: "Consolidation", weight: 1.2 },
    CategoryDef { name: "Infiltration", weight: 0.6 },
    CategoryDef { name: "Pneumothorax", weight: 1.3 },
    CategoryDef { name: "Edema", weight: 0.9 },
    CategoryDef { name: "Emphysema", weight: 0.7 },
    CategoryDef { name: "Fibrosis", weight: 0.8 },
    CategoryDef { name: "Effusion", weight: 1.0 },
    CategoryDef { name: "Pneumonia", weight: 1.1 },
    CategoryDef { name: "Pleural_Thickening", weight: 0.6 },
    CategoryDef { name: "Cardiomegaly", weight: 0.9 },
    CategoryDef { name: "Lung Lesion", weight: 1.5 },
    CategoryDef { name: "Fracture", weight: 0.4 },
    CategoryDef { name: "Lung Opacity", weight: 1.1 },
    CategoryDef { name: "Support Devices", weight: 0.2 },
    CategoryDef { name: "Nodule", weight: 1.4 },
    CategoryDef { name: "Mass", weight: 1.6 },
    CategoryDef { name: "Hernia", weight: 0.5 },
];

const CHEST_CRITICAL: &[&str] = &["Mass", "Nodule", "Lung Lesion", "Pneumothorax"];

pub fn chest_categories() -> &'static [CategoryDef] {
    CHEST_CATEGORIES
}

pub fn chest_critical() -> &'static [&'static str] {
    CHEST_CRITICAL
}
