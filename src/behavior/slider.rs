//! Testimonial carousel index.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCommand {
    Next,
    Prev,
    GoTo(usize),
}

/// Cyclic slide position in `0..len`. An empty carousel ignores every command.
///
/// `moves` counts accepted commands, including ones that land on the current
/// slide, so the view can re-align even when the index does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    moves: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            moves: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn apply(&mut self, command: SlideCommand) {
        if self.len == 0 {
            return;
        }
        self.index = match command {
            SlideCommand::Next => (self.index + 1) % self.len,
            SlideCommand::Prev => (self.index + self.len - 1) % self.len,
            SlideCommand::GoTo(index) if index < self.len => index,
            SlideCommand::GoTo(_) => return,
        };
        self.moves += 1;
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }
}

/// Horizontal strip offset that brings slide `index` into view.
pub fn strip_offset(index: usize, card_width: f64, gap: f64) -> f64 {
    index as f64 * (card_width + gap)
}
