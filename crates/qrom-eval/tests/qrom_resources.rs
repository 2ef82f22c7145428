//! T resources of synthesized QROM circuits, pinned as regression values.

use qrom_eval::{Comparison, Diagnostic, count_t_gates, evaluate_circuit};
use qrom_synth::{GadgetPolicy, QromConfig, Variant, lower_toffolis};

fn config(control: u32, policy: GadgetPolicy, variant: Variant) -> QromConfig {
    QromConfig::new(control, 1)
        .with_policy(policy)
        .with_variant(variant)
}

fn costs(config: &QromConfig) -> ((u64, u64), (u64, u64)) {
    let circuit = config.synthesize().unwrap();
    let raw = evaluate_circuit(&circuit).unwrap();
    let lowered = evaluate_circuit(&lower_toffolis(&circuit).unwrap()).unwrap();
    ((raw.t_count, raw.t_depth), (lowered.t_count, lowered.t_depth))
}

#[test]
fn test_two_bit_baselines() {
    let cases = [
        (Variant::Single, GadgetPolicy::Plain, (0, 0), (42, 23)),
        (Variant::Single, GadgetPolicy::Succinct, (12, 10), (33, 21)),
        (Variant::Dual, GadgetPolicy::Plain, (0, 0), (56, 23)),
        (Variant::Dual, GadgetPolicy::Succinct, (24, 14), (38, 18)),
    ];
    for (variant, policy, raw, lowered) in cases {
        let got = costs(&config(2, policy, variant));
        assert_eq!(got, (raw, lowered), "{variant}/{policy}");
    }
}

#[test]
fn test_single_ended_sweep() {
    // (control, plain lowered, succinct lowered, succinct raw)
    let sweep = [
        (0, (0, 0), (0, 0), (0, 0)),
        (1, (14, 8), (11, 8), (4, 4)),
        (3, (98, 53), (77, 47), (28, 22)),
        (4, (210, 113), (165, 99), (60, 46)),
        (5, (434, 233), (341, 203), (124, 94)),
    ];
    for (control, plain, succinct, succinct_raw) in sweep {
        let (_, plain_lowered) = costs(&config(control, GadgetPolicy::Plain, Variant::Single));
        let (raw, lowered) = costs(&config(control, GadgetPolicy::Succinct, Variant::Single));
        assert_eq!(plain_lowered, plain, "control={control}");
        assert_eq!(lowered, succinct, "control={control}");
        assert_eq!(raw, succinct_raw, "control={control}");
    }
}

#[test]
fn test_dual_ended_sweep() {
    // (control, succinct raw, succinct lowered, plain lowered)
    let sweep = [
        (1, (16, 12), (16, 12), (28, 16)),
        (2, (24, 14), (38, 18), (56, 23)),
        (3, (40, 20), (82, 31), (112, 38)),
        (4, (72, 32), (170, 57), (224, 68)),
    ];
    for (control, succinct_raw, succinct, plain) in sweep {
        let (raw, lowered) = costs(&config(control, GadgetPolicy::Succinct, Variant::Dual));
        let (_, plain_lowered) = costs(&config(control, GadgetPolicy::Plain, Variant::Dual));
        assert_eq!(raw, succinct_raw, "control={control}");
        assert_eq!(lowered, succinct, "control={control}");
        assert_eq!(plain_lowered, plain, "control={control}");
    }
}

#[test]
fn test_layered_matches_single_ended() {
    for control in 1..=4 {
        for policy in [GadgetPolicy::Plain, GadgetPolicy::Succinct] {
            let single = costs(&config(control, policy, Variant::Single));
            let layered = costs(&config(control, policy, Variant::Layered));
            assert_eq!(layered, single, "control={control} {policy}");
        }
    }
}

#[test]
fn test_distributed_sweep() {
    // (control, spread, succinct raw, succinct lowered, plain lowered)
    let sweep = [
        (2, 0, (12, 10), (33, 21), (42, 23)),
        (2, 1, (16, 10), (44, 24), (56, 29)),
        (2, 2, (32, 18), (88, 42), (112, 57)),
        (3, 1, (32, 22), (88, 50), (112, 59)),
        (3, 2, (48, 26), (132, 66), (168, 85)),
        (4, 2, (80, 50), (220, 118), (280, 145)),
    ];
    for (control, spread, succinct_raw, succinct, plain) in sweep {
        let distributed = |policy| {
            config(control, policy, Variant::Distributed).with_spread(spread)
        };
        let (raw, lowered) = costs(&distributed(GadgetPolicy::Succinct));
        let (_, plain_lowered) = costs(&distributed(GadgetPolicy::Plain));
        assert_eq!(raw, succinct_raw, "control={control} spread={spread}");
        assert_eq!(lowered, succinct, "control={control} spread={spread}");
        assert_eq!(plain_lowered, plain, "control={control} spread={spread}");
    }
}

#[test]
fn test_plain_toffolis_reported_once() {
    let circuit = config(2, GadgetPolicy::Plain, Variant::Single)
        .synthesize()
        .unwrap();
    let report = evaluate_circuit(&circuit).unwrap();
    assert_eq!(report.residual_toffolis, 6);
    assert_eq!(report.diagnostics.len(), 1);
    assert!(matches!(
        report.diagnostics[0],
        Diagnostic::ResidualToffoli { .. }
    ));

    let lowered = evaluate_circuit(&lower_toffolis(&circuit).unwrap()).unwrap();
    assert!(lowered.is_exact());
}

#[test]
fn test_text_and_direct_paths_agree() {
    for variant in [
        Variant::Single,
        Variant::Dual,
        Variant::Layered,
        Variant::Distributed,
    ] {
        let circuit = config(3, GadgetPolicy::Succinct, variant)
            .synthesize()
            .unwrap();
        let circuit = lower_toffolis(&circuit).unwrap();
        let direct = evaluate_circuit(&circuit).unwrap();
        let via_text = count_t_gates(&qrom_qasm::emit(&circuit).unwrap()).unwrap();
        assert_eq!(direct, via_text, "{variant}");
    }
}

#[test]
fn test_succinct_cheaper_than_plain() {
    for control in 1..=5 {
        for variant in [Variant::Single, Variant::Dual] {
            let (_, plain) = costs(&config(control, GadgetPolicy::Plain, variant));
            let (_, succinct) = costs(&config(control, GadgetPolicy::Succinct, variant));
            assert!(succinct.0 < plain.0, "control={control} {variant}");
        }
    }
}

#[test]
fn test_dual_against_single_comparison() {
    let single = evaluate_circuit(
        &lower_toffolis(
            &config(3, GadgetPolicy::Succinct, Variant::Single)
                .synthesize()
                .unwrap(),
        )
        .unwrap(),
    )
    .unwrap();
    let dual = evaluate_circuit(
        &lower_toffolis(
            &config(3, GadgetPolicy::Succinct, Variant::Dual)
                .synthesize()
                .unwrap(),
        )
        .unwrap(),
    )
    .unwrap();

    let cmp = Comparison::between(&single, &dual);
    assert_eq!((cmp.t_count.baseline, cmp.t_count.candidate), (77, 82));
    assert_eq!((cmp.t_depth.baseline, cmp.t_depth.candidate), (47, 31));
    assert!(cmp.t_depth.percent.is_some_and(|p| p < 100.0));
}
