use m6800_core::cpu::M6800State;
use m6800_core::cpu::m6800::M6800;
use m6800_cpu_validation::formal::{self, FormalEntry};
use m6800_cpu_validation::{TracingBus, execute_instruction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RUNS_PER_OPCODE: usize = 64;

/// Run every opcode a checker selects from random states and make sure the
/// checker is satisfied each time.
fn exercise(entry: &FormalEntry, rng: &mut StdRng) -> usize {
    let probe = (entry.create)();
    let opcodes: Vec<u8> = (0..=255u8).filter(|&op| probe.valid(op)).collect();
    assert!(!opcodes.is_empty(), "{} selects no opcodes", entry.name);

    let mut checked = 0;
    for &opcode in &opcodes {
        for _ in 0..RUNS_PER_OPCODE {
            let mut cpu = M6800::with_verification((entry.create)());
            let mut bus = TracingBus::new();
            rng.fill(&mut bus.memory[..]);

            let state = M6800State {
                a: rng.r#gen(),
                b: rng.r#gen(),
                x: rng.r#gen(),
                sp: rng.r#gen(),
                pc: rng.r#gen(),
                cc: rng.r#gen(),
            };
            bus.memory[state.pc as usize] = opcode;
            cpu.load_state(&state);

            execute_instruction(&mut cpu, &mut bus, 16).expect("instruction never ended");
            // The next fetch closes the record.
            cpu.execute_cycle(&mut bus);

            let hook = cpu.formal().expect("hook attached");
            assert_eq!(hook.checked(), 1, "{} opcode {opcode:#04x}", entry.name);
            assert!(
                hook.failures().is_empty(),
                "{} from {state:?}: {:?}",
                entry.name,
                hook.failures()
            );
            checked += 1;
        }
    }
    checked
}

#[test]
fn test_every_registered_checker_holds() {
    let mut rng = StdRng::seed_from_u64(0x6800);
    for entry in formal::all() {
        let checked = exercise(entry, &mut rng);
        assert!(checked > 0);
    }
}

#[test]
fn test_checker_catches_wrong_target() {
    use m6800_core::cpu::{FormalData, Verification};
    use m6800_core::core::BusAccess;

    let check = formal::JmpCheck;
    let mut data = FormalData {
        reads: vec![
            BusAccess {
                addr: 0x1001,
                data: 0x20,
            },
            BusAccess {
                addr: 0x1002,
                data: 0x00,
            },
        ],
        ..FormalData::default()
    };
    data.pre.pc = 0x1000;
    data.post.pc = 0x2000;
    assert!(check.check(0x7E, &data).is_ok());

    data.post.pc = 0x2001;
    assert!(check.check(0x7E, &data).is_err());
}

#[test]
fn test_branch_check_selects_all_conditions() {
    use m6800_core::cpu::Verification;

    let check = formal::BranchCheck;
    assert_eq!((0..=255u8).filter(|&op| check.valid(op)).count(), 16);
    assert!(formal::find("branch").is_some());
}
