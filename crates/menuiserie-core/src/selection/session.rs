//! Configurator session: a selection plus the step being edited.

use crate::catalog::{Product, ProductType};
use crate::error::ConfiguratorError;
use crate::pricing::{PriceBreakdown, PricingMode, PricingRules};
use crate::selection::{update_selection, Selection, SelectionPatch};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Steps of the per-product configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    Material,
    Color,
    Dimensions,
    AddOns,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Material,
        WizardStep::Color,
        WizardStep::Dimensions,
        WizardStep::AddOns,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Material => "material",
            WizardStep::Color => "color",
            WizardStep::Dimensions => "dimensions",
            WizardStep::AddOns => "add-ons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Material => "Matériau",
            WizardStep::Color => "Couleur",
            WizardStep::Dimensions => "Dimensions",
            WizardStep::AddOns => "Options",
        }
    }

    /// Hint shown under the step title.
    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Material => "Choisissez le matériau qui correspond à vos besoins",
            WizardStep::Color => "Sélectionnez la couleur qui s'harmonise avec votre décoration",
            WizardStep::Dimensions => "Personnalisez les dimensions selon votre espace",
            WizardStep::AddOns => "Ajoutez des options pour améliorer votre produit",
        }
    }

    /// Step number (1-indexed).
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    fn index(&self) -> usize {
        match self {
            WizardStep::Material => 0,
            WizardStep::Color => 1,
            WizardStep::Dimensions => 2,
            WizardStep::AddOns => 3,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// What the user is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "step", rename_all = "kebab-case")]
pub enum EditingState {
    /// One step of the per-product wizard.
    Wizard(WizardStep),
    /// Every option on a single page (generic configurator).
    SinglePage,
}

/// One user's configuration in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguratorSession {
    selection: Selection,
    state: EditingState,
    mode: PricingMode,
}

impl ConfiguratorSession {
    /// Generic configurator: every option on one page, flat-tier pricing.
    pub fn single_page(product_type: ProductType) -> Self {
        Self {
            selection: Selection::new(product_type),
            state: EditingState::SinglePage,
            mode: PricingMode::FlatTier,
        }
    }

    /// Per-product wizard starting at the material step, dimension-scaled pricing.
    pub fn wizard(product: &Product) -> Self {
        Self {
            selection: Selection::for_product(product),
            state: EditingState::Wizard(WizardStep::Material),
            mode: PricingMode::DimensionScaled,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn state(&self) -> EditingState {
        self.state
    }

    pub fn mode(&self) -> PricingMode {
        self.mode
    }

    /// Current wizard step, if any.
    pub fn step(&self) -> Option<WizardStep> {
        match self.state {
            EditingState::Wizard(step) => Some(step),
            EditingState::SinglePage => None,
        }
    }

    /// Move to the next step. Stays put on the last step and on a single page.
    pub fn next(&mut self) -> EditingState {
        if let EditingState::Wizard(step) = self.state {
            if let Some(next) = step.next() {
                self.move_to(next);
            }
        }
        self.state
    }

    /// Move to the previous step. Stays put on the first step and on a single page.
    pub fn previous(&mut self) -> EditingState {
        if let EditingState::Wizard(step) = self.state {
            if let Some(previous) = step.previous() {
                self.move_to(previous);
            }
        }
        self.state
    }

    fn move_to(&mut self, step: WizardStep) {
        debug!(
            selection_id = %self.selection.id(),
            step = step.as_str(),
            "wizard step changed"
        );
        self.state = EditingState::Wizard(step);
    }

    /// Progress through the wizard, 0 on the first step and 100 on the last.
    /// A single page is always complete.
    pub fn progress_percent(&self) -> u8 {
        match self.state {
            EditingState::Wizard(step) => {
                let last = WizardStep::ALL.len() - 1;
                (step.index() * 100 / last) as u8
            }
            EditingState::SinglePage => 100,
        }
    }

    /// Apply a patch to the selection, all or nothing.
    pub fn apply(&mut self, patch: &SelectionPatch) -> Result<(), ConfiguratorError> {
        self.selection = update_selection(&self.selection, patch)?;
        Ok(())
    }

    /// Price the current selection with the given strategy and default rules.
    pub fn breakdown(&self, mode: PricingMode) -> Result<PriceBreakdown, ConfiguratorError> {
        PricingRules::default().compute(&self.selection, mode)
    }

    /// Price the current selection with the session's own strategy.
    pub fn price(&self) -> Result<PriceBreakdown, ConfiguratorError> {
        self.breakdown(self.mode)
    }

    pub fn price_with(&self, rules: &PricingRules) -> Result<PriceBreakdown, ConfiguratorError> {
        rules.compute(&self.selection, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogue;
    use crate::money::Money;

    fn porte() -> &'static Product {
        Catalogue::builtin().get("porte-2").unwrap()
    }

    #[test]
    fn test_wizard_starts_at_material() {
        let session = ConfiguratorSession::wizard(porte());
        assert_eq!(session.step(), Some(WizardStep::Material));
        assert_eq!(session.progress_percent(), 0);
        assert_eq!(session.mode(), PricingMode::DimensionScaled);
    }

    #[test]
    fn test_wizard_next_and_previous_clamp() {
        let mut session = ConfiguratorSession::wizard(porte());
        assert_eq!(
            session.previous(),
            EditingState::Wizard(WizardStep::Material)
        );

        session.next();
        assert_eq!(session.progress_percent(), 33);
        session.next();
        assert_eq!(session.progress_percent(), 66);
        assert_eq!(session.next(), EditingState::Wizard(WizardStep::AddOns));
        assert_eq!(session.progress_percent(), 100);
        assert_eq!(session.next(), EditingState::Wizard(WizardStep::AddOns));

        assert_eq!(
            session.previous(),
            EditingState::Wizard(WizardStep::Dimensions)
        );
    }

    #[test]
    fn test_single_page_ignores_navigation() {
        let mut session = ConfiguratorSession::single_page(ProductType::Window);
        assert_eq!(session.next(), EditingState::SinglePage);
        assert_eq!(session.previous(), EditingState::SinglePage);
        assert_eq!(session.step(), None);
    }

    #[test]
    fn test_step_metadata() {
        assert_eq!(WizardStep::AddOns.number(), 4);
        assert_eq!(WizardStep::Color.display_name(), "Couleur");
        assert_eq!(WizardStep::Material.previous(), None);
        assert_eq!(WizardStep::Dimensions.next(), Some(WizardStep::AddOns));
    }

    #[test]
    fn test_session_prices_current_selection() {
        let mut session = ConfiguratorSession::single_page(ProductType::Window);
        session
            .apply(
                &SelectionPatch::new()
                    .material("aluminium")
                    .color("gris")
                    .dimension_tier("standard")
                    .toggle_add_on("double-vitrage"),
            )
            .unwrap();
        assert_eq!(session.price().unwrap().total, Money::eur(500));

        // the same selection has no product, so scaled pricing is unavailable
        assert_eq!(
            session.breakdown(PricingMode::DimensionScaled).unwrap_err(),
            ConfiguratorError::ProductRequired
        );
    }

    #[test]
    fn test_rejected_patch_keeps_session() {
        let mut session = ConfiguratorSession::wizard(porte());
        let before = session.selection().clone();
        assert!(session
            .apply(&SelectionPatch::new().toggle_add_on("motorisation"))
            .is_err());
        assert_eq!(session.selection(), &before);
    }

    #[test]
    fn test_wizard_price_with_rules() {
        let session = ConfiguratorSession::wizard(porte());
        assert_eq!(session.price().unwrap().total, Money::eur_cents(74999));

        let rules = PricingRules {
            reference_width_cm: 50,
            ..PricingRules::default()
        };
        // 100 × 100 is twice the 50 × 100 reference
        assert_eq!(
            session.price_with(&rules).unwrap().total,
            Money::eur_cents(149998)
        );
    }
}
