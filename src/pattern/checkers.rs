use crate::color::Color;
use crate::constants::black;
use crate::constants::white;
use crate::pattern::pattern::BasePattern;
use crate::pattern::pattern::Pattern;
use crate::tuple::Tuple;

#[derive(Clone, Debug, PartialEq)]
pub struct Checkers {
    base: BasePattern,
    a: Color,
    b: Color,
}

impl Checkers {
    pub fn new(a: Color, b: Color) -> Checkers {
        Checkers {
            base: BasePattern::new(),
            a,
            b,
        }
    }
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new(white(), black())
    }
}

impl Pattern for Checkers {
    fn get_base(&self) -> &BasePattern {
        &self.base
    }
    fn get_base_mut(&mut self) -> &mut BasePattern {
        &mut self.base
    }
    fn color_at_world(&self, world_point: Tuple) -> Color {
        let sum = world_point.x.floor() + world_point.y.floor() + world_point.z.floor();
        if (sum as i64).rem_euclid(2) == 0 {
            self.a
        } else {
            self.b
        }
    }
}
