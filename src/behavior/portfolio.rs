//! Portfolio filter: one active category, staggered reveal, fade-then-hide.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Residential,
    Commercial,
    Industrial,
    Renovation,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Residential,
        Category::Commercial,
        Category::Industrial,
        Category::Renovation,
    ];

    /// Value of the `data-category` / `data-filter` attributes.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Residential => "residencial",
            Category::Commercial => "comercial",
            Category::Industrial => "industrial",
            Category::Renovation => "remodelacion",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Residential => "Residencial",
            Category::Commercial => "Comercial",
            Category::Industrial => "Industrial",
            Category::Renovation => "Remodelación",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown project category '{}'", self.0)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.tag() == tag)
            .ok_or_else(|| UnknownCategory(tag.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Buttons in display order.
    pub fn buttons() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Only))
    }

    pub fn tag(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.tag(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "Todos",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(selected) => selected == category,
        }
    }
}

impl FromStr for Filter {
    type Err = UnknownCategory;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag == "all" {
            Ok(Filter::All)
        } else {
            tag.parse().map(Filter::Only)
        }
    }
}

/// Scheduled change for one card after a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    Reveal { delay_ms: u32 },
    Conceal { hide_after_ms: u32 },
}

pub fn plan_transitions(
    filter: Filter,
    cards: &[Category],
    stagger_ms: u32,
    fade_out_ms: u32,
) -> Vec<CardTransition> {
    cards
        .iter()
        .enumerate()
        .map(|(index, &category)| {
            if filter.matches(category) {
                CardTransition::Reveal {
                    delay_ms: index as u32 * stagger_ms,
                }
            } else {
                CardTransition::Conceal {
                    hide_after_ms: fade_out_ms,
                }
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Initial layout, no inline style.
    Resting,
    FadingIn,
    FadingOut,
    Hidden,
}

impl CardPhase {
    /// Whether the card occupies layout space.
    pub fn is_displayed(self) -> bool {
        !matches!(self, CardPhase::Hidden)
    }

    pub fn inline_style(self, fade_in_ms: u32, fade_out_ms: u32) -> String {
        match self {
            CardPhase::Resting => String::new(),
            CardPhase::FadingIn => format!(
                "display: block; animation: fadeIn {}s ease forwards;",
                f64::from(fade_in_ms) / 1000.0
            ),
            CardPhase::FadingOut => format!(
                "animation: fadeOut {}s ease forwards;",
                f64::from(fade_out_ms) / 1000.0
            ),
            CardPhase::Hidden => "display: none;".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioAction {
    Select(Filter),
    Reveal(usize),
    FadeOut(usize),
    Hide(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioState {
    filter: Filter,
    cards: Vec<Category>,
    phases: Vec<CardPhase>,
}

impl PortfolioState {
    pub fn new(cards: Vec<Category>) -> Self {
        let phases = vec![CardPhase::Resting; cards.len()];
        Self {
            filter: Filter::All,
            cards,
            phases,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn cards(&self) -> &[Category] {
        &self.cards
    }

    pub fn phase(&self, index: usize) -> CardPhase {
        self.phases.get(index).copied().unwrap_or(CardPhase::Hidden)
    }

    #[cfg(test)]
    pub fn displayed(&self) -> Vec<usize> {
        (0..self.phases.len())
            .filter(|&index| self.phases[index].is_displayed())
            .collect()
    }

    pub fn apply(&mut self, action: PortfolioAction) {
        match action {
            PortfolioAction::Select(filter) => self.filter = filter,
            PortfolioAction::Reveal(index) => self.set_phase(index, CardPhase::FadingIn),
            PortfolioAction::FadeOut(index) => {
                // Cards already out of the layout stay out, no fade replay.
                if self.phase(index) != CardPhase::Hidden {
                    self.set_phase(index, CardPhase::FadingOut);
                }
            }
            PortfolioAction::Hide(index) => self.set_phase(index, CardPhase::Hidden),
        }
    }

    fn set_phase(&mut self, index: usize, phase: CardPhase) {
        if let Some(slot) = self.phases.get_mut(index) {
            *slot = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Category> {
        vec![
            Category::Residential,
            Category::Commercial,
            Category::Residential,
            Category::Industrial,
            Category::Renovation,
        ]
    }

    /// Apply a selection and every timed follow-up as if all timers had fired.
    fn select(state: &mut PortfolioState, filter: Filter) {
        state.apply(PortfolioAction::Select(filter));
        let plan = plan_transitions(filter, state.cards(), 50, 300);
        for (index, transition) in plan.into_iter().enumerate() {
            match transition {
                CardTransition::Reveal { .. } => state.apply(PortfolioAction::Reveal(index)),
                CardTransition::Conceal { .. } => {
                    state.apply(PortfolioAction::FadeOut(index));
                    state.apply(PortfolioAction::Hide(index));
                }
            }
        }
    }

    #[test]
    fn test_plan_staggers_reveals_by_index() {
        let plan = plan_transitions(Filter::Only(Category::Residential), &cards(), 50, 300);
        assert_eq!(plan[0], CardTransition::Reveal { delay_ms: 0 });
        assert_eq!(plan[1], CardTransition::Conceal { hide_after_ms: 300 });
        assert_eq!(plan[2], CardTransition::Reveal { delay_ms: 100 });
        assert_eq!(plan[4], CardTransition::Conceal { hide_after_ms: 300 });
    }

    #[test]
    fn test_select_all_shows_every_card() {
        let mut state = PortfolioState::new(cards());
        select(&mut state, Filter::Only(Category::Industrial));
        assert_eq!(state.displayed(), vec![3]);

        select(&mut state, Filter::All);
        assert_eq!(state.displayed(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_selecting_same_filter_twice_is_idempotent() {
        let mut state = PortfolioState::new(cards());
        select(&mut state, Filter::Only(Category::Residential));
        let once = state.clone();
        select(&mut state, Filter::Only(Category::Residential));
        assert_eq!(state, once);
        assert_eq!(state.displayed(), vec![0, 2]);
    }

    #[test]
    fn test_concealed_cards_leave_layout() {
        let mut state = PortfolioState::new(cards());
        select(&mut state, Filter::Only(Category::Commercial));
        assert_eq!(state.phase(0), CardPhase::Hidden);
        assert_eq!(
            state.phase(0).inline_style(500, 300),
            "display: none;".to_string()
        );
        assert_eq!(
            state.phase(1).inline_style(500, 300),
            "display: block; animation: fadeIn 0.5s ease forwards;"
        );
    }

    #[test]
    fn test_fade_out_skips_hidden_cards() {
        let mut state = PortfolioState::new(cards());
        state.apply(PortfolioAction::Hide(1));
        state.apply(PortfolioAction::FadeOut(1));
        assert_eq!(state.phase(1), CardPhase::Hidden);
    }

    #[test]
    fn test_filter_tags_round_trip() {
        for filter in Filter::buttons() {
            assert_eq!(filter.tag().parse::<Filter>(), Ok(filter));
        }
        assert!("villas".parse::<Filter>().is_err());
    }
}
