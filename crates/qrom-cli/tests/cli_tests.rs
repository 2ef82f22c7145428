//! CLI argument parsing and input loading tests.
//!
//! The CLI is a binary crate, so parsing is checked on a mirror of its clap
//! structs and loading through the crates the commands call into.

// ============================================================================
// Input loading
// ============================================================================

mod program_loading {
    use qrom_ir::Program;
    use std::fs;

    #[test]
    fn test_count_qasm_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.qasm");
        fs::write(
            &path,
            "OPENQASM 2.0;\ninclude \"qelib1.inc\";\nqreg q[2];\nt q[0];\ncx q[0],q[1];\ntdg q[1];\n",
        )
        .unwrap();

        let source = fs::read_to_string(&path).unwrap();
        let report = qrom_eval::count_t_gates(&source).unwrap();
        assert_eq!((report.t_count, report.t_depth), (2, 2));
    }

    #[test]
    fn test_json_program_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");
        let program = qrom_qasm::parse("OPENQASM 2.0;\nqreg q[1];\nrz(pi/4) q[0];\n").unwrap();
        fs::write(&path, program.to_json().unwrap()).unwrap();

        let loaded = Program::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.num_qubits, 1);
        assert_eq!(loaded.instructions[0].name, "rz");
        let report = qrom_eval::ResourceReport::from_program(&loaded).unwrap();
        assert_eq!(report.t_count, 1);
    }

    #[test]
    fn test_invalid_qasm_is_error() {
        assert!(qrom_eval::count_t_gates("this is not qasm").is_err());
    }

    #[test]
    fn test_out_of_range_qubit_is_error() {
        let program = Program {
            num_qubits: 1,
            num_clbits: 0,
            instructions: vec![qrom_ir::GateRecord::new("t", vec![3], vec![])],
        };
        assert!(qrom_eval::ResourceReport::from_program(&program).is_err());
    }
}

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand};
    use qrom_synth::Variant;

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "qrom")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Synth {
            #[arg(short, long)]
            control: u32,
            #[arg(short, long, default_value = "1")]
            target: u32,
            #[arg(long)]
            succinct: bool,
            #[arg(long, default_value = "single")]
            variant: Variant,
            #[arg(long, default_value = "0")]
            spread: u32,
            #[arg(short, long, default_value = "0")]
            address: u64,
            #[arg(short, long)]
            data: Option<String>,
            #[arg(long, conflicts_with = "data")]
            random: bool,
            #[arg(long, requires = "random")]
            seed: Option<u64>,
            #[arg(long)]
            lower: bool,
            #[arg(short, long)]
            output: Option<String>,
        },
        Count {
            #[arg(short, long)]
            input: String,
            #[arg(long)]
            json: bool,
        },
        Sweep {
            #[arg(long, default_value = "1")]
            start: u32,
            #[arg(long, default_value = "6")]
            end: u32,
            #[arg(short, long, default_value = "1")]
            target: u32,
            #[arg(long)]
            plain: bool,
            #[arg(long)]
            lower: bool,
            #[arg(long)]
            json: bool,
        },
        Verify {
            #[arg(long, value_delimiter = ',', default_value = "2,3")]
            sizes: Vec<u32>,
            #[arg(long, default_value = "3")]
            trials: u32,
            #[arg(long)]
            seed: Option<u64>,
            #[arg(long)]
            succinct: bool,
        },
        Version,
    }

    #[test]
    fn test_parse_synth_minimal() {
        let cli = TestCli::try_parse_from(["qrom", "synth", "-c", "3"]).unwrap();
        match cli.command {
            TestCommands::Synth {
                control,
                target,
                succinct,
                variant,
                spread,
                address,
                data,
                random,
                seed,
                lower,
                output,
            } => {
                assert_eq!(control, 3);
                assert_eq!(target, 1);
                assert_eq!((variant, spread), (Variant::Single, 0));
                assert!(!succinct && !random && !lower);
                assert_eq!(address, 0);
                assert!(data.is_none() && seed.is_none());
                assert!(output.is_none());
            }
            _ => panic!("expected synth"),
        }
    }

    #[test]
    fn test_parse_synth_all_args() {
        let cli = TestCli::try_parse_from([
            "qrom",
            "-vv",
            "synth",
            "--control",
            "2",
            "-t",
            "4",
            "--succinct",
            "--variant",
            "dual",
            "-a",
            "3",
            "-d",
            "0110",
            "--lower",
            "-o",
            "qrom.qasm",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            TestCommands::Synth {
                control,
                target,
                succinct,
                variant,
                address,
                data,
                lower,
                output,
                ..
            } => {
                assert_eq!((control, target, address), (2, 4, 3));
                assert_eq!(variant, Variant::Dual);
                assert!(succinct && lower);
                assert_eq!(data.as_deref(), Some("0110"));
                assert_eq!(output.as_deref(), Some("qrom.qasm"));
            }
            _ => panic!("expected synth"),
        }
    }

    #[test]
    fn test_parse_synth_distributed_random() {
        let cli = TestCli::try_parse_from([
            "qrom",
            "synth",
            "-c",
            "4",
            "--variant",
            "distributed",
            "--spread",
            "2",
            "--random",
            "--seed",
            "11",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Synth {
                variant,
                spread,
                random,
                seed,
                ..
            } => {
                assert_eq!((variant, spread), (Variant::Distributed, 2));
                assert!(random);
                assert_eq!(seed, Some(11));
            }
            _ => panic!("expected synth"),
        }
    }

    #[test]
    fn test_parse_synth_random_conflicts_with_data() {
        assert!(
            TestCli::try_parse_from(["qrom", "synth", "-c", "1", "-d", "01", "--random"]).is_err()
        );
        assert!(TestCli::try_parse_from(["qrom", "synth", "-c", "1", "--seed", "3"]).is_err());
        assert!(TestCli::try_parse_from(["qrom", "synth", "-c", "1", "--variant", "ring"]).is_err());
    }

    #[test]
    fn test_parse_synth_missing_control() {
        assert!(TestCli::try_parse_from(["qrom", "synth"]).is_err());
    }

    #[test]
    fn test_parse_count() {
        let cli = TestCli::try_parse_from(["qrom", "count", "-i", "c.qasm", "--json"]).unwrap();
        match cli.command {
            TestCommands::Count { input, json } => {
                assert_eq!(input, "c.qasm");
                assert!(json);
            }
            _ => panic!("expected count"),
        }
    }

    #[test]
    fn test_parse_sweep_defaults() {
        let cli = TestCli::try_parse_from(["qrom", "sweep"]).unwrap();
        match cli.command {
            TestCommands::Sweep {
                start,
                end,
                target,
                plain,
                lower,
                json,
            } => {
                assert_eq!((start, end, target), (1, 6, 1));
                assert!(!plain && !lower && !json);
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_parse_verify_sizes() {
        let cli =
            TestCli::try_parse_from(["qrom", "verify", "--sizes", "1,2,4", "--seed", "7"]).unwrap();
        match cli.command {
            TestCommands::Verify {
                sizes,
                trials,
                seed,
                succinct,
            } => {
                assert_eq!(sizes, vec![1, 2, 4]);
                assert_eq!(trials, 3);
                assert_eq!(seed, Some(7));
                assert!(!succinct);
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn test_parse_verify_default_sizes() {
        let cli = TestCli::try_parse_from(["qrom", "verify"]).unwrap();
        match cli.command {
            TestCommands::Verify { sizes, .. } => assert_eq!(sizes, vec![2, 3]),
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn test_parse_version() {
        let cli = TestCli::try_parse_from(["qrom", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    #[test]
    fn test_unknown_command() {
        assert!(TestCli::try_parse_from(["qrom", "compile"]).is_err());
    }
}
