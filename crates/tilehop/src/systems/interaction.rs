//! Entity-versus-entity contact.
//!
//! Every unordered pair of live, overlapping entities is visited once, in
//! scene order. Handlers see a snapshot of the other body taken before either
//! side reacted, so the outcome does not depend on which side goes first.

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// A stomp that happened this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stomp {
    pub target: EntityId,
    pub stomper: EntityId,
}

fn takes_part(entity: &Entity) -> bool {
    entity.active && entity.body.is_alive()
}

/// Dispatch stomp and touch handlers for all overlapping pairs.
pub fn resolve_interactions(entities: &mut [Entity]) -> Vec<Stomp> {
    let mut stomps = Vec::new();
    for j in 1..entities.len() {
        let (head, tail) = entities.split_at_mut(j);
        let b = &mut tail[0];
        for a in head.iter_mut() {
            if !takes_part(a) || !takes_part(b) {
                continue;
            }
            if !a.body.bounds().overlaps(&b.body.bounds()) {
                continue;
            }
            let (sa, sb) = (a.body.clone(), b.body.clone());
            if sa.is_stomping(&sb) && sb.stompable {
                b.stomped_by(&sa);
                a.touched(&sb);
                stomps.push(Stomp { target: b.id, stomper: a.id });
            } else if sb.is_stomping(&sa) && sa.stompable {
                a.stomped_by(&sb);
                b.touched(&sa);
                stomps.push(Stomp { target: a.id, stomper: b.id });
            } else {
                a.touched(&sb);
                b.touched(&sa);
            }
        }
    }
    stomps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::{Killable, Stompable, Stomper};
    use crate::components::entity::{Life, Team};
    use glam::Vec2;

    fn player(pos: Vec2, vel: Vec2) -> Entity {
        let mut e = Entity::new(EntityId(1))
            .with_tag("player")
            .with_pos(pos)
            .with_vel(vel)
            .with_behavior(Stomper::new(400.0))
            .with_behavior(Killable::new(2.0));
        e.body.team = Team::Player;
        e
    }

    fn goomba(pos: Vec2) -> Entity {
        let mut e = Entity::new(EntityId(2))
            .with_tag("goomba")
            .with_pos(pos)
            .with_behavior(Stompable)
            .with_behavior(Killable::new(0.5));
        e.body.harmful = true;
        e.body.stompable = true;
        e
    }

    #[test]
    fn stomp_flattens_target_and_bounces_stomper() {
        let mut entities = vec![
            player(Vec2::new(100.0, 86.0), Vec2::new(0.0, 120.0)),
            goomba(Vec2::new(100.0, 100.0)),
        ];
        let stomps = resolve_interactions(&mut entities);
        assert_eq!(stomps, vec![Stomp { target: EntityId(2), stomper: EntityId(1) }]);
        assert!(entities[0].body.is_alive());
        assert_eq!(entities[0].body.vel.y, -400.0);
        assert_eq!(entities[1].body.life, Life::Dying { elapsed: 0.0 });
        assert!(!entities[1].body.harmful);
    }

    #[test]
    fn stomp_is_found_in_either_order() {
        let mut entities = vec![
            goomba(Vec2::new(100.0, 100.0)),
            player(Vec2::new(100.0, 86.0), Vec2::new(0.0, 120.0)),
        ];
        let stomps = resolve_interactions(&mut entities);
        assert_eq!(stomps.len(), 1);
        assert!(entities[1].body.is_alive());
        assert!(!entities[0].body.is_alive());
    }

    #[test]
    fn side_contact_kills_player() {
        let mut entities = vec![
            player(Vec2::new(90.0, 100.0), Vec2::new(50.0, 0.0)),
            goomba(Vec2::new(100.0, 100.0)),
        ];
        assert!(resolve_interactions(&mut entities).is_empty());
        assert_eq!(entities[0].body.life, Life::Dying { elapsed: 0.0 });
        assert!(entities[1].body.is_alive());
    }

    #[test]
    fn separated_or_dead_entities_are_skipped() {
        let mut entities = vec![
            player(Vec2::new(0.0, 100.0), Vec2::ZERO),
            goomba(Vec2::new(16.0, 100.0)),
        ];
        resolve_interactions(&mut entities);
        assert!(entities[0].body.is_alive());

        entities[1].body.pos.x = 8.0;
        entities[1].body.life = Life::Dying { elapsed: 0.0 };
        resolve_interactions(&mut entities);
        assert!(entities[0].body.is_alive());
    }
}
