//! Transition parameters, scaled back when the visitor asks for reduced motion.
//!
//! Components never hard-code timings; they render [`Transition::style`] into
//! inline CSS custom properties that the stylesheet's transitions read.

pub const CURSOR_BLINK_PERIOD_MS: u32 = 800;

const SECTION_OFFSET_PX: i32 = 20;
const SECTION_DURATION_MS: u32 = 600;
const REDUCED_DURATION_MS: u32 = 100;
const SKILL_STAGGER_MS: u32 = 100;
const SKILL_OFFSET_X_PX: i32 = -20;
const SKILL_DURATION_MS: u32 = 300;
const PROJECT_STAGGER_MS: u32 = 200;
const PROJECT_OFFSET_PX: i32 = 30;
const MENU_ITEM_STAGGER_MS: u32 = 100;
const MENU_ITEM_OFFSET_PX: i32 = 20;
const MENU_ITEM_DURATION_MS: u32 = 200;
const HERO_DURATION_MS: u32 = 800;
const HERO_FADE_DURATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

/// Pieces of the hero banner that fade in on their own schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroElement {
    Portrait,
    Details,
    Greeting,
    Name,
    FirstLine,
    SecondLine,
    Actions,
    Socials,
}

impl HeroElement {
    fn delay_ms(self) -> u32 {
        match self {
            Self::Portrait => 0,
            Self::Details => 200,
            Self::Greeting => 500,
            Self::Name => 700,
            Self::FirstLine => 1_000,
            Self::Actions => 1_200,
            Self::Socials => 1_400,
            Self::SecondLine => 2_500,
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Self::Details => (30, 0),
            Self::Name | Self::Actions => (0, 20),
            _ => (0, 0),
        }
    }

    fn duration_ms(self) -> u32 {
        match self {
            Self::Portrait | Self::Details => HERO_DURATION_MS,
            _ => HERO_FADE_DURATION_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub offset_x_px: i32,
    pub offset_y_px: i32,
}

impl Transition {
    pub fn style(self) -> String {
        format!(
            "--reveal-x: {}px; --reveal-y: {}px; --reveal-duration: {}ms; --reveal-delay: {}ms;",
            self.offset_x_px, self.offset_y_px, self.duration_ms, self.delay_ms
        )
    }
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }

    pub fn cursor_blinks(self) -> bool {
        !self.is_reduced()
    }

    pub fn section_entrance(self) -> Transition {
        Transition {
            delay_ms: 0,
            duration_ms: self.pick(SECTION_DURATION_MS, REDUCED_DURATION_MS),
            offset_x_px: 0,
            offset_y_px: self.pick(SECTION_OFFSET_PX, 0),
        }
    }

    pub fn skill_row(self, index: usize) -> Transition {
        Transition {
            delay_ms: self.stagger(index, SKILL_STAGGER_MS),
            duration_ms: SKILL_DURATION_MS,
            offset_x_px: SKILL_OFFSET_X_PX,
            offset_y_px: 0,
        }
    }

    pub fn project_card(self, index: usize) -> Transition {
        Transition {
            delay_ms: self.stagger(index, PROJECT_STAGGER_MS),
            duration_ms: SECTION_DURATION_MS,
            offset_x_px: 0,
            offset_y_px: PROJECT_OFFSET_PX,
        }
    }

    /// Menu overlay items keep their stagger regardless of preference.
    pub fn menu_item(self, index: usize) -> Transition {
        Transition {
            delay_ms: stagger_delay(index, MENU_ITEM_STAGGER_MS),
            duration_ms: MENU_ITEM_DURATION_MS,
            offset_x_px: 0,
            offset_y_px: MENU_ITEM_OFFSET_PX,
        }
    }

    pub fn hero(self, element: HeroElement) -> Transition {
        let (offset_x, offset_y) = element.offset();
        Transition {
            delay_ms: self.pick(element.delay_ms(), 0),
            duration_ms: self.pick(element.duration_ms(), REDUCED_DURATION_MS),
            offset_x_px: self.pick(offset_x, 0),
            offset_y_px: self.pick(offset_y, 0),
        }
    }

    fn stagger(self, index: usize, step_ms: u32) -> u32 {
        self.pick(stagger_delay(index, step_ms), 0)
    }

    fn pick<T>(self, full: T, reduced: T) -> T {
        match self {
            Self::Full => full,
            Self::Reduced => reduced,
        }
    }
}

fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO_ELEMENTS: [HeroElement; 8] = [
        HeroElement::Portrait,
        HeroElement::Details,
        HeroElement::Greeting,
        HeroElement::Name,
        HeroElement::FirstLine,
        HeroElement::SecondLine,
        HeroElement::Actions,
        HeroElement::Socials,
    ];

    #[test]
    fn full_motion_section_entrance() {
        let transition = MotionPreference::Full.section_entrance();
        assert_eq!(transition.offset_y_px, 20);
        assert_eq!(transition.duration_ms, 600);
    }

    #[test]
    fn reduced_motion_flattens_entrances() {
        let reduced = MotionPreference::Reduced;
        assert_eq!(reduced.section_entrance().offset_y_px, 0);
        assert_eq!(reduced.section_entrance().duration_ms, 100);
        for element in HERO_ELEMENTS {
            let transition = reduced.hero(element);
            assert_eq!(transition.delay_ms, 0, "{element:?}");
            assert_eq!(transition.offset_x_px, 0, "{element:?}");
            assert_eq!(transition.offset_y_px, 0, "{element:?}");
        }
        assert_eq!(reduced.skill_row(5).delay_ms, 0);
        assert_eq!(reduced.project_card(2).delay_ms, 0);
        assert!(!reduced.cursor_blinks());
    }

    #[test]
    fn staggers_grow_with_index() {
        let full = MotionPreference::Full;
        assert_eq!(full.skill_row(0).delay_ms, 0);
        assert_eq!(full.skill_row(3).delay_ms, 300);
        assert_eq!(full.project_card(2).delay_ms, 400);
        assert!(full.cursor_blinks());
    }

    #[test]
    fn menu_items_stagger_even_when_reduced() {
        assert_eq!(MotionPreference::Reduced.menu_item(3).delay_ms, 300);
    }

    #[test]
    fn second_line_waits_for_first() {
        let full = MotionPreference::Full;
        assert!(full.hero(HeroElement::SecondLine).delay_ms > full.hero(HeroElement::FirstLine).delay_ms);
    }

    #[test]
    fn style_renders_custom_properties() {
        let style = MotionPreference::Full.project_card(1).style();
        assert_eq!(
            style,
            "--reveal-x: 0px; --reveal-y: 30px; --reveal-duration: 600ms; --reveal-delay: 200ms;"
        );
    }
}
