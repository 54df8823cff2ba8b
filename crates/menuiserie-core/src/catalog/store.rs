//! Read-only catalogue store and the built-in product list.

use crate::catalog::{Product, ProductType};
use crate::error::ConfiguratorError;
use crate::money::Money;
use crate::options::{OptionCatalog, OptionKind};
use std::collections::HashSet;
use std::sync::LazyLock;

/// The compiled-in catalogue, validated on first use.
static BUILTIN: LazyLock<Catalogue> = LazyLock::new(|| {
    Catalogue::new(builtin_products()).expect("built-in catalogue violates its invariants")
});

/// An immutable, ordered list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    /// Build a catalogue, checking every product against the option table.
    pub fn new(products: Vec<Product>) -> Result<Self, ConfiguratorError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(ConfiguratorError::InvalidCatalogue(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            validate_product(product)?;
        }
        Ok(Self { products })
    }

    /// The shop's own six products.
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    /// Every product, in catalogue order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product. Absence is an ordinary outcome.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product, treating absence as an error.
    pub fn require(&self, id: &str) -> Result<&Product, ConfiguratorError> {
        self.get(id)
            .ok_or_else(|| ConfiguratorError::ProductNotFound(id.to_string()))
    }

    /// Products of one category, in catalogue order.
    pub fn by_category(&self, category: ProductType) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The first `n` products.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    /// Catalogue page filter: optional category, then a text match on name or
    /// description. A blank term keeps everything.
    pub fn search(&self, category: Option<ProductType>, term: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| p.matches_text(term))
            .collect()
    }
}

fn validate_product(product: &Product) -> Result<(), ConfiguratorError> {
    let invalid = |msg: String| Err(ConfiguratorError::InvalidCatalogue(msg));

    if product.base_price.is_negative() {
        return invalid(format!("{}: negative base price", product.id));
    }
    if product.materials.is_empty() {
        return invalid(format!("{}: no materials", product.id));
    }
    if product.colors.is_empty() {
        return invalid(format!("{}: no colors", product.id));
    }

    let options = OptionCatalog::resolve(product.category);
    for (kind, ids) in [
        (OptionKind::Material, &product.materials),
        (OptionKind::Color, &product.colors),
    ] {
        if let Some(unknown) = ids.iter().find(|id| !options.contains(kind, id.as_str())) {
            return invalid(format!(
                "{}: {} '{}' is not offered for {}",
                product.id, kind, unknown, product.category
            ));
        }
    }
    Ok(())
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product::new("fenetre-1", "Fenêtre Eco-Confort", ProductType::Window, Money::eur_cents(24999))
            .with_description(
                "Fenêtre à double vitrage offrant une isolation thermique et acoustique \
                 optimale, idéale pour les habitations modernes.",
            )
            .with_image("/images/fenetre-1.jpg")
            .with_features([
                "Double vitrage",
                "Isolation thermique renforcée",
                "Profils fins",
                "Étanchéité à l'air",
            ])
            .with_materials(["pvc", "aluminium", "bois"])
            .with_colors(["blanc", "gris", "noir"]),
        Product::new("fenetre-2", "Fenêtre Panoramique XL", ProductType::Window, Money::eur_cents(59999))
            .with_description(
                "Grande baie vitrée avec vue panoramique, idéale pour les salons et les \
                 pièces à vivre donnant sur l'extérieur.",
            )
            .with_image("/images/fenetre-2.jpg")
            .with_features([
                "Triple vitrage",
                "Grandes dimensions",
                "Isolation thermique premium",
                "Anti-effraction",
            ])
            .with_materials(["aluminium", "mixte"])
            .with_colors(["gris", "noir", "blanc"]),
        Product::new("porte-1", "Porte d'Entrée Sécurité+", ProductType::Door, Money::eur_cents(89999))
            .with_description(
                "Porte d'entrée haute sécurité avec serrure multipoints et matériaux \
                 renforcés pour une protection optimale de votre domicile.",
            )
            .with_image("/images/porte-1.jpg")
            .with_features([
                "Serrure 5 points",
                "Isolation thermique",
                "Résistance classe 3",
                "Joint périphérique",
            ])
            .with_materials(["pvc", "aluminium", "bois"])
            .with_colors(["gris", "rouge", "noir"]),
        Product::new("porte-2", "Porte Coulissante Moderne", ProductType::Door, Money::eur_cents(74999))
            .with_description(
                "Solution élégante pour gagner de l'espace avec un design contemporain \
                 qui s'intègre parfaitement dans votre intérieur.",
            )
            .with_image("/images/porte-2.jpg")
            .with_features([
                "Système coulissant silencieux",
                "Fermeture douce",
                "Verre sécurit",
                "Rail caché",
            ])
            .with_materials(["pvc", "aluminium", "bois"])
            .with_colors(["noir", "gris", "blanc"]),
        Product::new("volet-1", "Volet Roulant Électrique", ProductType::Shutter, Money::eur_cents(34999))
            .with_description(
                "Volet roulant motorisé avec commande à distance, offrant confort \
                 d'utilisation et sécurité renforcée pour votre habitation.",
            )
            .with_image("/images/volet-1.jpg")
            .with_features([
                "Motorisation intégrée",
                "Commande smartphone",
                "Détection d'obstacles",
                "Isolation renforcée",
            ])
            .with_materials(["aluminium", "pvc"])
            .with_colors(["blanc", "gris"]),
        Product::new("volet-2", "Volet Battant Tradition", ProductType::Shutter, Money::eur_cents(25999))
            .with_description(
                "Volet battant traditionnel alliant charme d'autrefois et performances \
                 modernes pour une esthétique authentique de votre façade.",
            )
            .with_image("/images/volet-2.jpg")
            .with_features([
                "Pentures réglables",
                "Protection solaire",
                "Résistance aux intempéries",
                "Quincaillerie de qualité",
            ])
            .with_materials(["bois", "pvc", "aluminium"])
            .with_colors(["blanc", "bleu"]),
    ]
}
