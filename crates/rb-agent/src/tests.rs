//! Unit tests for rb-agent.

use crate::{Agent, AgentTraits, Cop, Entity, Legitimacy};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn traits() -> AgentTraits {
    AgentTraits { vision: 2, movement: true, legitimacy: Legitimacy::Fixed(0.8) }
}

fn agent() -> Agent {
    Agent::new(traits(), 0.5, 0.9)
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_tests {
    use super::*;
    use crate::AgentStatus;

    #[test]
    fn starts_free_and_quiet() {
        let a = agent();
        assert!(a.is_active());
        assert!(!a.is_rebel());
        assert_eq!(a.jail_term(), 0);
        assert_eq!(a.status(), AgentStatus::Quiet);
        assert_eq!(a.risk_aversion(), 0.5);
        assert_eq!(a.perceived_hardship(), 0.9);
    }

    #[test]
    fn jail_term_counts_down_to_zero() {
        let mut a = agent();
        a.set_jail_term(3);
        assert!(!a.is_active());
        for expected in [2, 1, 0, 0, 0] {
            a.decrease_jail_term();
            assert_eq!(a.jail_term(), expected);
        }
        assert!(a.is_active());
    }

    #[test]
    fn free_agent_unaffected_by_aging() {
        let mut a = agent();
        a.set_rebel(true);
        a.decrease_jail_term();
        assert_eq!(a.jail_term(), 0);
        assert!(a.is_active());
        assert!(a.is_rebel());
    }

    #[test]
    fn status_precedence_rebel_first() {
        let mut a = agent();
        a.set_rebel(true);
        a.set_jail_term(5);
        assert_eq!(a.status(), AgentStatus::Rebelling, "arrest leaves the flag set");

        a.set_rebel(false);
        assert_eq!(a.status(), AgentStatus::Jailed);
    }

    #[test]
    fn legitimacy_modes() {
        use rb_core::LegitimacyMode;
        assert_eq!(Legitimacy::from_mode(LegitimacyMode::Fixed, 0.3), Legitimacy::Fixed(0.3));
        let w = Legitimacy::from_mode(LegitimacyMode::NeighborhoodWeighted, 0.4);
        assert_eq!(w, Legitimacy::NeighborhoodWeighted { base: 0.4 });
        assert_eq!(w.base(), 0.4);
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod entity_tests {
    use super::*;
    use crate::EntityKind;

    #[test]
    fn cop_capabilities() {
        let cop = Entity::Cop(Cop { vision: 3, max_jail_term: 7 });
        assert!(cop.is_cop());
        assert!(cop.is_active());
        assert!(!cop.is_active_rebel());
        assert!(!cop.is_jailed_agent());
        assert_eq!(cop.vision(), 3);
        assert_eq!(cop.kind(), EntityKind::Cop);
        assert!(cop.as_agent().is_none());
    }

    #[test]
    fn active_rebel_requires_freedom() {
        let mut a = agent();
        a.set_rebel(true);
        let mut e = Entity::Agent(a);
        assert!(e.is_active_rebel());

        e.as_agent_mut().unwrap().set_jail_term(2);
        assert!(!e.is_active_rebel());
        assert!(e.is_jailed_agent());
        assert!(!e.is_active());
    }

    #[test]
    fn kind_display() {
        assert_eq!(EntityKind::Agent.to_string(), "agent");
        assert_eq!(EntityKind::Cop.to_string(), "cop");
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use rb_core::{EntityId, LegitimacyMode, PopulationSize, RebellionConfig, SimRng};
    use rb_world::ActivityView;

    use super::*;
    use crate::{Population, PopulationBuilder};

    #[test]
    fn cops_first_then_agents() {
        let pop = PopulationBuilder::new(2, 3).build(&mut SimRng::new(0));
        assert_eq!(pop.len(), 5);
        assert_eq!(pop.cop_count(), 2);
        assert_eq!(pop.agent_count(), 3);
        assert!(pop.get(EntityId(0)).unwrap().is_cop());
        assert!(pop.get(EntityId(1)).unwrap().is_cop());
        assert!(pop.get(EntityId(2)).unwrap().is_agent());
        assert_eq!(pop.agents().map(|(id, _)| id.0).collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn traits_drawn_in_unit_interval_and_reproducible() {
        let a = PopulationBuilder::new(0, 100).build(&mut SimRng::new(9));
        let b = PopulationBuilder::new(0, 100).build(&mut SimRng::new(9));
        for ((_, x), (_, y)) in a.agents().zip(b.agents()) {
            assert!((0.0..1.0).contains(&x.risk_aversion()));
            assert!((0.0..1.0).contains(&x.perceived_hardship()));
            assert_eq!(x, y);
        }
    }

    #[test]
    fn draw_order_is_risk_then_hardship() {
        let pop = PopulationBuilder::new(1, 2).build(&mut SimRng::new(5));
        let mut rng = SimRng::new(5);
        let draws: Vec<f64> = (0..4).map(|_| rng.random()).collect();
        let agents: Vec<&Agent> = pop.agents().map(|(_, a)| a).collect();
        assert_eq!(agents[0].risk_aversion(), draws[0]);
        assert_eq!(agents[0].perceived_hardship(), draws[1]);
        assert_eq!(agents[1].risk_aversion(), draws[2]);
        assert_eq!(agents[1].perceived_hardship(), draws[3]);
    }

    #[test]
    fn from_config_copies_parameters() {
        let config = RebellionConfig {
            dimension:             5,
            cops:                  PopulationSize::Count(1),
            agents:                PopulationSize::Count(4),
            vision:                3,
            max_jail_term:         9,
            movement:              false,
            legitimacy_mode:       LegitimacyMode::NeighborhoodWeighted,
            government_legitimacy: 0.6,
            ..Default::default()
        };
        let pop = PopulationBuilder::from_config(&config).build(&mut SimRng::new(0));
        assert_eq!(pop.get(EntityId(0)).unwrap().as_cop(), Some(&Cop { vision: 3, max_jail_term: 9 }));
        let agent = pop.agent(EntityId(1)).unwrap();
        assert_eq!(agent.vision(), 3);
        assert!(!agent.can_move());
        assert_eq!(agent.legitimacy(), Legitimacy::NeighborhoodWeighted { base: 0.6 });
    }

    #[test]
    fn agent_mut_rejects_cops_and_unknown_ids() {
        let mut pop = Population::new(vec![
            Entity::Cop(Cop { vision: 1, max_jail_term: 1 }),
            Entity::Agent(agent()),
        ]);
        assert!(pop.agent_mut(EntityId(0)).is_err());
        assert!(pop.agent_mut(EntityId(9)).is_err());
        pop.agent_mut(EntityId(1)).unwrap().set_jail_term(4);
        assert!(!pop.is_active(EntityId(1)));
        assert!(pop.is_active(EntityId(0)));
        assert!(!pop.is_active(EntityId(9)));
    }

    #[test]
    fn status_counts_partition_agents() {
        let mut rebel = agent();
        rebel.set_rebel(true);
        let mut jailed = agent();
        jailed.set_jail_term(2);
        let pop = Population::new(vec![
            Entity::Cop(Cop { vision: 1, max_jail_term: 1 }),
            Entity::Agent(agent()),
            Entity::Agent(rebel),
            Entity::Agent(jailed),
        ]);
        assert_eq!(pop.status_counts(), (1, 1, 1));
    }
}
