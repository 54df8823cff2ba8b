//! The option table: one row per product type.
//!
//! Every priced choice the configurator can offer lives here. Adding a product
//! type or an option means adding a row or an entry; nothing else branches on
//! product type.

use crate::catalog::ProductType;
use crate::money::Money;
use crate::options::OptionDefinition;

/// Options shared by every product type plus the per-type extensions.
pub(crate) struct TypeOptions {
    pub product_type: ProductType,
    pub extra_materials: &'static [OptionDefinition],
    pub extra_colors: &'static [OptionDefinition],
    pub add_ons: &'static [OptionDefinition],
}

pub(crate) static BASE_MATERIALS: &[OptionDefinition] = &[
    OptionDefinition::material("pvc", "PVC", Money::eur(0), 100),
    OptionDefinition::material("aluminium", "Aluminium", Money::eur(150), 120),
    OptionDefinition::material("bois", "Bois", Money::eur(250), 100),
];

pub(crate) static BASE_COLORS: &[OptionDefinition] = &[
    OptionDefinition::flat("blanc", "Blanc", Money::eur(0)),
    OptionDefinition::flat("gris", "Gris anthracite", Money::eur(50)),
    OptionDefinition::flat("noir", "Noir", Money::eur(50)),
];

pub(crate) static DIMENSION_TIERS: &[OptionDefinition] = &[
    OptionDefinition::flat("standard", "Standard", Money::eur(0)),
    OptionDefinition::flat("sur-mesure-petit", "Sur mesure (petit)", Money::eur(100)),
    OptionDefinition::flat("sur-mesure-moyen", "Sur mesure (moyen)", Money::eur(200)),
    OptionDefinition::flat("sur-mesure-grand", "Sur mesure (grand)", Money::eur(300)),
];

pub(crate) static OPTION_TABLE: &[TypeOptions] = &[
    TypeOptions {
        product_type: ProductType::Window,
        extra_materials: &[OptionDefinition::material(
            "mixte",
            "Mixte bois-alu",
            Money::eur(350),
            135,
        )],
        extra_colors: &[],
        add_ons: &[
            OptionDefinition::flat("double-vitrage", "Double vitrage renforcé", Money::eur(100)),
            OptionDefinition::flat(
                "isolation-thermique",
                "Isolation thermique premium",
                Money::eur(150),
            ),
        ],
    },
    TypeOptions {
        product_type: ProductType::Door,
        extra_materials: &[],
        extra_colors: &[OptionDefinition::flat("rouge", "Rouge bordeaux", Money::eur(75))],
        add_ons: &[
            OptionDefinition::flat("serrure-securite", "Serrure haute sécurité", Money::eur(200)),
            OptionDefinition::flat("judas", "Judas numérique", Money::eur(120)),
        ],
    },
    TypeOptions {
        product_type: ProductType::Shutter,
        extra_materials: &[],
        extra_colors: &[OptionDefinition::flat("bleu", "Bleu lavande", Money::eur(75))],
        add_ons: &[
            OptionDefinition::flat("motorisation", "Motorisation électrique", Money::eur(250)),
            OptionDefinition::flat("commande-distance", "Commande à distance", Money::eur(100)),
        ],
    },
];

/// Row for a product type. Every `ProductType` variant has exactly one row.
pub(crate) fn row(product_type: ProductType) -> &'static TypeOptions {
    OPTION_TABLE
        .iter()
        .find(|row| row.product_type == product_type)
        .unwrap_or_else(|| unreachable!("option table has no row for {product_type}"))
}
