// src/sections/home.rs

use crate::models::{Block, View};
use crate::sections::SectionKind;

pub(super) fn render() -> View {
    let mut view = View::new(SectionKind::Home);
    view.push(Block::text(
        "Tennis is a popular sport played between two individuals (singles) or two teams of two \
         players each (doubles), where the objective is to hit a ball over a net into the \
         opponent's side of the court in such a way that they cannot return it within the rules \
         of the game.",
    ));
    view.push(Block::subheading("Types of Tennis"));
    view.push(Block::text("Singles: One-on-one match between two players."));
    view.push(Block::text(
        "Doubles: A match between two teams of two players each, requiring more coordination and teamwork.",
    ));
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_static_text() {
        let view = render();
        assert_eq!(view.section, SectionKind::Home);
        assert!(view.filter.is_none());
        assert_eq!(view.tables().count(), 0);
        assert_eq!(view.blocks.len(), 4);
    }
}
