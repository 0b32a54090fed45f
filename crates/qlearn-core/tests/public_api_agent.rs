use qlearn_core::{
    AgentConfig, AgentPreset, ApproximateAgent, BIAS_FEATURE, BiasExtractor, QAgent, QTable,
    SparseVector, StoreKind, TabularAgent,
};

#[test]
fn public_tabular_update_matches_hand_computed_target() {
    let config = AgentConfig::new(0.0, 0.5, 0.9).expect("valid config");
    let mut table = QTable::new();
    table.set("s2", "a1", 4.0);
    table.set("s2", "a2", 6.0);
    let mut agent = QAgent::seeded(config, table, 7).expect("agent");

    assert_eq!(agent.q_value(&"s1", &"a1"), 0.0);
    agent.update(&"s1", &"a1", &"s2", &["a1", "a2"], 10.0);

    assert!((agent.q_value(&"s1", &"a1") - 7.7).abs() < 1e-12);
    assert_eq!(agent.policy(&"s2", &["a1", "a2"]), Some("a2"));
}

#[test]
fn public_approximate_update_shares_bias_weight() {
    let config = AgentConfig::new(0.0, 1.0, 0.0).expect("valid config");
    let mut agent: ApproximateAgent<BiasExtractor, &'static str> =
        QAgent::approximate(config, BiasExtractor, 7).expect("agent");

    agent.update(&(0, 0), &'x', &(0, 1), &['x', 'y'], 5.0);

    assert_eq!(agent.weight(&BIAS_FEATURE), 5.0);
    assert_eq!(agent.q_value(&(4, 2), &'y'), 5.0);

    let features: SparseVector<&'static str> = [(BIAS_FEATURE, 1.0)].into_iter().collect();
    assert_eq!(agent.values().dot(&features), 5.0);
}

#[test]
fn public_pacman_preset_learns_a_two_step_chain() {
    let config = AgentConfig::preset(AgentPreset::Pacman);
    let mut agent: TabularAgent<u8, &str> = QAgent::tabular(config, 42).expect("agent");
    let actions = ["stay", "advance"];

    // 0 --advance--> 1 --advance--> 2 (terminal, reward 10); "stay" costs 1.
    for _ in 0..500 {
        let mut state = 0_u8;
        while state < 2 {
            let action = agent.choose_action(&state, &actions).expect("non-terminal");
            let (next, reward) = match action {
                "advance" if state == 1 => (2, 10.0),
                "advance" => (state + 1, 0.0),
                _ => (state, -1.0),
            };
            let next_actions: &[&str] = if next == 2 { &[] } else { &actions };
            agent.update(&state, &action, &next, next_actions, reward);
            state = next;
        }
    }

    assert_eq!(agent.policy(&0, &actions), Some("advance"));
    assert_eq!(agent.policy(&1, &actions), Some("advance"));
    assert!(agent.value(&1, &actions) > agent.value(&0, &actions));

    let snapshot = agent.snapshot();
    assert_eq!(snapshot.kind, StoreKind::Tabular);
    assert_eq!(snapshot.entry_count, agent.values().len());
}
