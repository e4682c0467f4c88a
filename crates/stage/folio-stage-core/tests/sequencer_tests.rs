use folio_stage_core::{
    AnimationStage, SelectionSignal, StageDelays, StageEvent, StageSequencer, StageTime,
};

fn slow_zoom_delays() -> StageDelays {
    folio_test_fixtures::delays::config("slow-zoom").unwrap()
}

/// Collects stage transitions across update ticks, the way a rendering host
/// would fan them out to the UI regions.
#[derive(Default)]
struct Probe {
    transitions: Vec<(u64, AnimationStage)>,
}

impl Probe {
    fn observe(&mut self, at_ms: u64, seq: &StageSequencer) {
        for event in &seq.outputs().events {
            if let StageEvent::StageChanged { to, .. } = event {
                self.transitions.push((at_ms, *to));
            }
        }
    }

    fn stages(&self) -> Vec<AnimationStage> {
        self.transitions.iter().map(|(_, s)| *s).collect()
    }
}

fn step(seq: &mut StageSequencer, probe: &mut Probe, from_ms: u64, to_ms: u64, tick_ms: u64) {
    let mut t = from_ms;
    while t < to_ms {
        let dt = tick_ms.min(to_ms - t);
        seq.update(StageTime::from_millis(dt));
        t += dt;
        probe.observe(t, seq);
    }
}

#[test]
fn selection_sets_top_nav_morph_synchronously() {
    let mut seq = StageSequencer::default();
    seq.on_selection_changed(SelectionSignal::selected(Some("cloth-simulation".into())));
    // Before any update tick, stage 1 is already visible.
    assert_eq!(seq.stage(), AnimationStage::TopNavMorph);
    assert_eq!(seq.project().unwrap().as_str(), "cloth-simulation");
    assert_eq!(seq.pending_transitions(), 3);
}

#[test]
fn stage_is_idle_iff_last_signal_was_deselect() {
    let mut seq = StageSequencer::default();

    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    assert!(!seq.stage().is_idle());

    seq.on_selection_changed(SelectionSignal::cleared());
    assert!(seq.stage().is_idle());
    assert!(seq.project().is_none());
    assert_eq!(seq.pending_transitions(), 0);

    seq.on_selection_changed(SelectionSignal::selected(None));
    assert!(!seq.stage().is_idle());
}

#[test]
fn full_sequence_fires_at_configured_offsets() {
    let mut seq = StageSequencer::new(slow_zoom_delays());
    let mut probe = Probe::default();

    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    probe.observe(0, &seq);
    step(&mut seq, &mut probe, 0, 1400, 50);

    assert_eq!(
        probe.transitions,
        vec![
            (0, AnimationStage::TopNavMorph),
            (600, AnimationStage::Zoom),
            (1000, AnimationStage::NodeDetails),
            (1350, AnimationStage::BottomNav),
        ]
    );
    assert_eq!(seq.pending_transitions(), 0);
}

#[test]
fn stages_never_fire_out_of_order_with_coarse_ticks() {
    // A long frame hitch can make several deadlines due at once; they must
    // still apply in deadline order within the single drain.
    let mut seq = StageSequencer::new(slow_zoom_delays());
    let mut probe = Probe::default();

    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    probe.observe(0, &seq);
    seq.update(StageTime::from_millis(2000));
    probe.observe(2000, &seq);

    assert_eq!(
        probe.stages(),
        vec![
            AnimationStage::TopNavMorph,
            AnimationStage::Zoom,
            AnimationStage::NodeDetails,
            AnimationStage::BottomNav,
        ]
    );
}

#[test]
fn deselect_mid_flight_resets_immediately_and_silences_timers() {
    let mut seq = StageSequencer::new(slow_zoom_delays());
    let mut probe = Probe::default();

    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    probe.observe(0, &seq);
    step(&mut seq, &mut probe, 0, 700, 50);

    seq.on_selection_changed(SelectionSignal::cleared());
    probe.observe(700, &seq);
    assert_eq!(seq.stage(), AnimationStage::Idle);
    assert_eq!(seq.pending_transitions(), 0);

    // Long after the original node-details/bottom-nav deadlines: nothing.
    step(&mut seq, &mut probe, 700, 3000, 50);
    assert_eq!(
        probe.transitions,
        vec![
            (0, AnimationStage::TopNavMorph),
            (600, AnimationStage::Zoom),
            (700, AnimationStage::Idle),
        ]
    );
}

#[test]
fn reselect_restarts_sequence_without_leaking_timers() {
    let mut seq = StageSequencer::new(slow_zoom_delays());
    let mut probe = Probe::default();

    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    probe.observe(0, &seq);
    step(&mut seq, &mut probe, 0, 300, 50);

    // Second selection before the first zoom deadline (t=600).
    seq.on_selection_changed(SelectionSignal::selected(Some("p2".into())));
    probe.observe(300, &seq);
    assert_eq!(seq.stage(), AnimationStage::TopNavMorph);
    assert_eq!(seq.project().unwrap().as_str(), "p2");
    assert_eq!(seq.pending_transitions(), 3);

    step(&mut seq, &mut probe, 300, 1700, 50);

    // Zoom fires at 300 + 600 = 900, not at the first sequence's 600; no
    // transition from the first sequence's timers is ever observed.
    assert_eq!(
        probe.transitions,
        vec![
            (0, AnimationStage::TopNavMorph),
            (300, AnimationStage::TopNavMorph),
            (900, AnimationStage::Zoom),
            (1300, AnimationStage::NodeDetails),
            (1650, AnimationStage::BottomNav),
        ]
    );
}

#[test]
fn reselect_keeps_project_attached_to_events() {
    let mut seq = StageSequencer::new(slow_zoom_delays());
    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    seq.on_selection_changed(SelectionSignal::selected(Some("p2".into())));
    seq.update(StageTime::from_millis(600));

    for event in &seq.outputs().events {
        if let StageEvent::StageChanged { project, .. } = event {
            assert_eq!(project.as_ref().unwrap().as_str(), "p2");
        }
    }
}

#[test]
fn teardown_cancels_everything_and_goes_inert() {
    let mut seq = StageSequencer::new(slow_zoom_delays());
    let mut probe = Probe::default();

    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    probe.observe(0, &seq);
    assert_eq!(seq.pending_transitions(), 3);

    seq.teardown();
    assert!(seq.is_torn_down());
    assert_eq!(seq.pending_transitions(), 0);

    // Zero post-teardown firings, and later calls emit nothing.
    step(&mut seq, &mut probe, 0, 5000, 100);
    let out = seq.on_selection_changed(SelectionSignal::selected(Some("p2".into())));
    assert!(out.is_empty());
    assert_eq!(probe.stages(), vec![AnimationStage::TopNavMorph]);
}

#[test]
fn unresolved_project_still_sequences() {
    let mut seq = StageSequencer::new(slow_zoom_delays());
    let mut probe = Probe::default();

    seq.on_selection_changed(SelectionSignal::selected(None));
    probe.observe(0, &seq);
    step(&mut seq, &mut probe, 0, 1400, 50);

    assert_eq!(
        probe.stages(),
        vec![
            AnimationStage::TopNavMorph,
            AnimationStage::Zoom,
            AnimationStage::NodeDetails,
            AnimationStage::BottomNav,
        ]
    );
    assert!(seq.project().is_none());
}

#[test]
fn sequence_completed_event_marks_bottom_nav() {
    let mut seq = StageSequencer::new(slow_zoom_delays());
    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    let out = seq.update(StageTime::from_millis(1350));
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, StageEvent::SequenceCompleted)));
}

#[test]
fn non_monotonic_delays_last_firer_wins() {
    // Integrator misconfiguration: node-details scheduled after bottom-nav.
    let mut seq = StageSequencer::new(StageDelays {
        to_top_nav_morph: 0.0,
        to_zoom: 100.0,
        to_node_details: 500.0,
        to_bottom_nav: 300.0,
    });
    seq.on_selection_changed(SelectionSignal::selected(Some("p1".into())));
    seq.update(StageTime::from_millis(300));
    assert_eq!(seq.stage(), AnimationStage::BottomNav);
    seq.update(StageTime::from_millis(200));
    // The late node-details timer still sets its own target stage.
    assert_eq!(seq.stage(), AnimationStage::NodeDetails);
}
