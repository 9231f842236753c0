//! Transient feeding effects
//!
//! Feeding the baby leaves a regurgitated fish and a heart on screen for a
//! few seconds. They carry no simulation weight; the arena keeps them only so
//! a presentation layer can draw them and expire them on time.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    RegurgitatedFish,
    Heart,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub position: Vec3,
    /// Seconds left before the effect disappears
    pub remaining: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Effects {
    active: Vec<Effect>,
}

impl Effects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: EffectKind, position: Vec3, lifetime: f32) {
        self.active.push(Effect {
            kind,
            position,
            remaining: lifetime,
        });
    }

    /// Age every effect by `dt` and drop the expired ones.
    pub fn tick(&mut self, dt: f32) {
        for effect in &mut self.active {
            effect.remaining -= dt;
        }
        self.active.retain(|effect| effect.remaining > 0.0);
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.active.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_expire_after_their_lifetime() {
        let mut effects = Effects::new();
        effects.spawn(EffectKind::Heart, Vec3::Y, 0.1);
        effects.spawn(EffectKind::RegurgitatedFish, Vec3::ZERO, 0.25);

        effects.tick(0.05);
        assert_eq!(effects.len(), 2);
        effects.tick(0.1);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects.iter().next().map(|e| e.kind), Some(EffectKind::RegurgitatedFish));
        effects.tick(0.2);
        assert!(effects.is_empty());
    }
}
