//! Trap system: cooldown-gated spike damage and slow debuffs.
//!
//! A trigger affects one zombie: the first overlapping zombie not already
//! under this trap's slow. Slow traps remember each zombie they slowed and
//! when, remove their multiplier exactly once on expiry, and never stack
//! their own multiplier on a zombie that still carries it. A zombie that a
//! spike earlier in the same pass will kill is no longer a candidate.

use hecs::{Entity, World};

use horde_core::components::{Health, Hitbox, SlowDebuff, SlowMark, Structure, Trap, TrapEffect, Zombie};
use horde_core::enums::ZombieState;
use horde_core::events::GameEvent;
use horde_core::types::{Aabb, Position};

use crate::systems::damage::damage_zombie;
use crate::systems::TickContext;

enum TrapAction {
    Spike { zombie: Entity, damage: f32 },
    Slow { zombie: Entity, trap: Entity, factor: f32 },
    Restore { zombie: Entity, trap: Entity },
}

pub fn run(world: &mut World, ctx: &mut TickContext) {
    // Health left after the spikes queued so far this pass.
    let mut zombies: Vec<(Entity, Aabb, f32)> = world
        .query::<(&Zombie, &Position, &Hitbox, &Health)>()
        .iter()
        .filter(|(_, (z, _, _, h))| z.state != ZombieState::Dead && h.current > 0.0)
        .map(|(e, (_, pos, hitbox, h))| (e, Aabb::from_center(pos.0, hitbox.size), h.current))
        .collect();

    let mut actions: Vec<TrapAction> = Vec::new();
    let mut live_traps: Vec<Entity> = Vec::new();

    for (trap_entity, (trap, structure, pos, hitbox, health)) in
        world.query_mut::<(&mut Trap, &Structure, &Position, &Hitbox, &Health)>()
    {
        if health.current <= 0.0 {
            continue;
        }
        live_traps.push(trap_entity);

        // Expire slows whose window has elapsed. Marks for zombies that died
        // are simply dropped.
        let now = ctx.now;
        trap.affected.retain(|mark| {
            let alive = zombies.iter().any(|(z, _, _)| *z == mark.zombie);
            if alive && mark.expires_at_secs <= now {
                actions.push(TrapAction::Restore {
                    zombie: mark.zombie,
                    trap: trap_entity,
                });
                return false;
            }
            alive
        });

        if ctx.now < trap.ready_at_secs {
            continue;
        }

        let area = Aabb::from_center(pos.0, hitbox.size);
        let victim = zombies.iter_mut().find(|(z, body, remaining)| {
            *remaining > 0.0
                && area.intersects(body)
                && !trap.affected.iter().any(|m| m.zombie == *z)
        });
        let Some((zombie, _, remaining)) = victim else {
            continue;
        };
        let zombie = *zombie;

        match trap.effect {
            TrapEffect::Spike { damage } => {
                *remaining -= damage;
                actions.push(TrapAction::Spike { zombie, damage });
            }
            TrapEffect::Slow {
                factor,
                duration_secs,
            } => {
                trap.affected.push(SlowMark {
                    zombie,
                    expires_at_secs: ctx.now + duration_secs,
                });
                actions.push(TrapAction::Slow {
                    zombie,
                    trap: trap_entity,
                    factor,
                });
            }
        }
        trap.ready_at_secs = ctx.now + trap.cooldown_secs;
        ctx.events.push(GameEvent::TrapTriggered {
            kind: structure.kind,
        });
    }

    for action in actions {
        match action {
            TrapAction::Spike { zombie, damage } => {
                damage_zombie(world, zombie, damage, ctx.events);
            }
            TrapAction::Slow {
                zombie,
                trap,
                factor,
            } => {
                if let Ok(mut z) = world.get::<&mut Zombie>(zombie) {
                    if !z.slows.iter().any(|s| s.source == trap) {
                        z.slows.push(SlowDebuff {
                            source: trap,
                            factor,
                        });
                    }
                }
            }
            TrapAction::Restore { zombie, trap } => {
                if let Ok(mut z) = world.get::<&mut Zombie>(zombie) {
                    z.slows.retain(|s| s.source != trap);
                }
            }
        }
    }

    // A destroyed trap can no longer expire its slows, so drop them here.
    for (_e, zombie) in world.query_mut::<&mut Zombie>() {
        zombie.slows.retain(|s| live_traps.contains(&s.source));
    }
}

