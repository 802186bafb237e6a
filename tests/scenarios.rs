//! End-to-end scenarios for a door that can be opened, closed, and slammed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use switchyard::{
    state_enum, trigger_enum, Compiler, FireError, Fired, Machine, Memory, Token,
};

state_enum! {
    enum DoorState {
        Closed,
        Open,
    }
}

trigger_enum! {
    enum DoorTrigger {
        Open,
        Close,
    }
}

struct Door {
    memory: Memory<DoorState>,
    was_slammed: bool,
    events: Vec<String>,
}

impl Door {
    fn new(machine: &Machine<DoorState, DoorTrigger, Door>) -> Self {
        Self {
            memory: machine.create_memory(),
            was_slammed: false,
            events: Vec::new(),
        }
    }
}

impl Token<DoorState> for Door {
    fn memory(&self) -> &Memory<DoorState> {
        &self.memory
    }

    fn memory_mut(&mut self) -> &mut Memory<DoorState> {
        &mut self.memory
    }
}

#[test]
fn open_close_cycle() {
    let mut compiler = Compiler::new();
    compiler.initial(DoorState::Closed);
    compiler
        .tr(DoorState::Closed, DoorTrigger::Open, DoorState::Open)
        .unwrap();
    compiler
        .tr(DoorState::Open, DoorTrigger::Close, DoorState::Closed)
        .unwrap();
    let machine: Machine<DoorState, DoorTrigger> = compiler.compile().unwrap();

    let mut instance = machine.create_memory();
    assert_eq!(instance.state(), &DoorState::Closed);

    machine.fire(DoorTrigger::Open, &mut instance).unwrap();
    assert_eq!(instance.state(), &DoorState::Open);

    machine.fire(DoorTrigger::Close, &mut instance).unwrap();
    assert_eq!(instance.state(), &DoorState::Closed);

    let err = machine.fire(DoorTrigger::Close, &mut instance).unwrap_err();
    assert_eq!(
        err,
        FireError::NoTransitionForTrigger {
            state: "Closed".to_string(),
            trigger: "Close".to_string(),
        }
    );
    assert_eq!(instance.state(), &DoorState::Closed);
}

fn slamming_door() -> Machine<DoorState, DoorTrigger, Door> {
    let mut compiler = Compiler::new();
    compiler.initial(DoorState::Closed);
    compiler
        .tr_with::<bool>(DoorState::Closed, DoorTrigger::Open, DoorState::Open)
        .unwrap()
        .on(|_: &DoorState, _: &DoorTrigger, _: &DoorState, door: &mut Door, slammed: &bool| {
            door.was_slammed = *slammed;
            door.events.push("opened".to_string());
        })
        .unwrap();
    compiler
        .tr(DoorState::Open, DoorTrigger::Close, DoorState::Closed)
        .unwrap();
    compiler
        .on_any(|from: &DoorState, trigger: &DoorTrigger, to: &DoorState, door: &mut Door| {
            door.events.push(format!("{from:?} --{trigger:?}--> {to:?}"));
        })
        .unwrap();
    compiler.compile().unwrap()
}

#[test]
fn payload_reaches_the_action() {
    let machine = slamming_door();
    let mut door = Door::new(&machine);

    machine.fire_with(DoorTrigger::Open, &mut door, true).unwrap();

    assert_eq!(door.memory.state(), &DoorState::Open);
    assert!(door.was_slammed);
    assert_eq!(door.events, vec!["opened", "Closed --Open--> Open"]);
}

#[test]
fn missing_payload_is_an_argument_error() {
    let machine = slamming_door();
    let mut door = Door::new(&machine);

    let err = machine.fire(DoorTrigger::Open, &mut door).unwrap_err();

    assert!(matches!(err, FireError::ArgumentRequired { expected: "bool", .. }));
    assert_eq!(door.memory.state(), &DoorState::Closed);
    assert!(!door.was_slammed);
    assert!(door.events.is_empty());
}

#[test]
fn instances_from_one_machine_are_independent() {
    let machine = slamming_door();
    let mut first = Door::new(&machine);
    let mut second = Door::new(&machine);

    machine.fire_with(DoorTrigger::Open, &mut first, false).unwrap();

    assert_eq!(first.memory.state(), &DoorState::Open);
    assert_eq!(second.memory.state(), &DoorState::Closed);
    assert!(second.events.is_empty());

    machine.fire_with(DoorTrigger::Open, &mut second, true).unwrap();
    machine.fire(DoorTrigger::Close, &mut first).unwrap();

    assert_eq!(first.memory.state(), &DoorState::Closed);
    assert!(!first.was_slammed);
    assert_eq!(second.memory.state(), &DoorState::Open);
    assert!(second.was_slammed);
}

#[test]
fn rejected_guard_skips_action_and_any_callback() {
    let actions = Arc::new(AtomicUsize::new(0));
    let any = Arc::new(AtomicUsize::new(0));

    let mut compiler = Compiler::new();
    compiler.initial(DoorState::Closed);
    let counter = Arc::clone(&actions);
    compiler
        .tr(DoorState::Closed, DoorTrigger::Open, DoorState::Open)
        .unwrap()
        .guard(|_: &DoorState, _: &DoorTrigger, _: &DoorState| false)
        .unwrap()
        .on(move |_: &DoorState, _: &DoorTrigger, _: &DoorState, _: &mut Memory<DoorState>| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    let counter = Arc::clone(&any);
    compiler
        .on_any(move |_: &DoorState, _: &DoorTrigger, _: &DoorState, _: &mut Memory<DoorState>| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    let machine = compiler.compile().unwrap();

    let mut instance = machine.create_memory();
    let fired = machine.fire(DoorTrigger::Open, &mut instance).unwrap();

    assert_eq!(
        fired,
        Fired::Blocked {
            state: DoorState::Closed
        }
    );
    assert_eq!(instance.state(), &DoorState::Closed);
    assert_eq!(actions.load(Ordering::SeqCst), 0);
    assert_eq!(any.load(Ordering::SeqCst), 0);
}

#[test]
fn reset_forms_bypass_callbacks() {
    let machine = slamming_door();
    let mut door = Door::new(&machine);

    machine.reset_to(DoorState::Open, &mut door).unwrap();
    assert_eq!(door.memory.state(), &DoorState::Open);

    machine.reset(&mut door);
    assert_eq!(door.memory.state(), &DoorState::Closed);
    assert!(door.events.is_empty());
}
