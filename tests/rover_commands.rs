// tests/rover_commands.rs
use glam::DVec2;
use mars_rover::{CardinalDirection, Command, Position, Rover, RoverBuilder, RoverError};

const EPS: f64 = 1e-9;

fn setup() -> Rover {
    RoverBuilder::new().add_default_commands().build()
}

fn assert_near(actual: Position, expected: (f64, f64)) {
    let expected = DVec2::new(expected.0, expected.1);
    assert!(
        actual.as_dvec2().abs_diff_eq(expected, EPS),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_builder_defaults() {
    let rover = setup();

    assert_eq!(rover.direction(), 90);
    assert_eq!(rover.cardinal(), Some(CardinalDirection::North));
    assert_eq!(rover.position(), Position::ORIGIN);
    assert_eq!(rover.call_signs(), vec!['F', 'L', 'R']);
    assert_eq!(rover.command('L'), Some(Command::Turn(90)));
    assert_eq!(rover.command('R'), Some(Command::Turn(-90)));
    assert_eq!(rover.command('F'), Some(Command::MoveForward(1)));
}

#[test]
fn test_unconfigured_builder_has_no_commands() {
    let mut rover = RoverBuilder::new().build();

    let report = rover.execute_commands("LRF").unwrap();

    assert_eq!(report.executed, 0);
    assert_eq!(report.unknown, vec!['L', 'R', 'F']);
    assert_eq!(rover.direction(), 90);
}

#[test]
fn test_set_direction_wraps_into_range() {
    let mut rover = setup();

    for degrees in [0, 1, 90, 359, 360, 361, 720, 1000, i32::MAX] {
        rover.set_direction(degrees).unwrap();
        assert_eq!(rover.direction(), degrees % 360);
        assert!((0..360).contains(&rover.direction()));
    }
}

#[test]
fn test_set_direction_rejects_negative() {
    let mut rover = setup();
    rover.set_direction(45).unwrap();

    let err = rover.set_direction(-1).unwrap_err();

    assert_eq!(err, RoverError::NegativeDirection { degrees: -1 });
    assert!(err.is_invalid_argument());
    assert_eq!(rover.direction(), 45);
}

#[test]
fn test_turn_right_from_east_wraps() {
    let mut rover = setup();
    rover.set_direction(0).unwrap();

    rover.execute(rover.turn(-90)).unwrap();

    assert_eq!(rover.direction(), 270);
    assert_eq!(rover.cardinal(), Some(CardinalDirection::South));
}

#[test]
fn test_turn_left_then_right_restores_direction() {
    let mut rover = setup();

    for start in [0, 90, 135, 359] {
        for d in [0, 1, 45, 90, 180, 359, 360, 725] {
            rover.set_direction(start).unwrap();
            rover.execute(Command::Turn(d)).unwrap();
            rover.execute(Command::Turn(-d)).unwrap();
            assert_eq!(rover.direction(), start, "start {start}, turn {d}");
        }
    }
}

#[test]
fn test_partial_turn_gives_intermediate_heading() {
    let mut rover = RoverBuilder::new()
        .add_command('H', |rover: &Rover| rover.turn(45))
        .build();

    rover.execute_commands("H").unwrap();

    assert_eq!(rover.direction(), 135);
    assert_eq!(rover.cardinal(), None);
}

#[test]
fn test_move_forward_follows_heading() {
    let mut rover = setup();

    rover.execute_commands("F").unwrap();
    assert_near(rover.position(), (0.0, 1.0));

    rover.set_direction(0).unwrap();
    rover.execute_commands("F").unwrap();
    assert_near(rover.position(), (1.0, 1.0));

    rover.set_direction(225).unwrap();
    rover.execute(Command::MoveForward(2)).unwrap();
    let step = 2.0 * std::f64::consts::FRAC_1_SQRT_2;
    assert_near(rover.position(), (1.0 - step, 1.0 - step));
}

#[test]
fn test_move_uses_heading_at_execution_time() {
    let mut rover = setup();
    let forward = rover.move_forward(1);

    rover.set_direction(180).unwrap();
    rover.execute(forward).unwrap();
    rover.execute(forward).unwrap();

    assert_near(rover.position(), (-2.0, 0.0));
}

#[test]
fn test_forward_right_forward_sequence() {
    let mut rover = setup();

    let report = rover.execute_commands("FFRFF").unwrap();

    assert_eq!(report.executed, 5);
    assert!(report.is_clean());
    assert_eq!(rover.direction(), 0);
    assert_near(rover.position(), (2.0, 2.0));
}

#[test]
fn test_unknown_command_is_skipped() {
    let mut rover = setup();

    let report = rover.execute_commands("FXF").unwrap();

    assert_eq!(report.executed, 2);
    assert_eq!(report.unknown, vec!['X']);
    assert_near(rover.position(), (0.0, 2.0));
}

#[test]
fn test_call_signs_are_case_sensitive() {
    let mut rover = setup();

    let report = rover.execute_commands("flr").unwrap();

    assert_eq!(report.unknown, vec!['f', 'l', 'r']);
    assert_eq!(rover.direction(), 90);
    assert_eq!(rover.position(), Position::ORIGIN);
}

#[test]
fn test_missing_commands_is_rejected() {
    let mut rover = setup();

    let err = rover.execute_commands(None).unwrap_err();

    assert_eq!(err, RoverError::MissingCommands);
    assert!(err.is_invalid_argument());
}

#[test]
fn test_empty_commands_do_nothing() {
    let mut rover = setup();

    let report = rover.execute_commands("").unwrap();

    assert_eq!(report, Default::default());
    assert_eq!(rover.direction(), 90);
}

#[test]
fn test_custom_commands_replace_defaults() {
    let mut rover = RoverBuilder::new()
        .add_default_commands()
        .add_command('F', Command::MoveForward(3))
        .add_command('B', |rover: &Rover| rover.move_forward(-1))
        .build();

    rover.execute_commands("FB").unwrap();

    assert_near(rover.position(), (0.0, 2.0));
}

#[test]
fn test_builder_start_state_is_not_normalized() {
    let rover = RoverBuilder::new()
        .direction(400)
        .position((3.0, -4.0))
        .build();

    assert_eq!(rover.direction(), 400);
    assert_eq!(rover.position(), Position::new(3.0, -4.0));
}

#[test]
fn test_out_of_range_start_is_normalized_on_first_turn() {
    let mut rover = RoverBuilder::new()
        .direction(400)
        .add_default_commands()
        .build();

    rover.execute_commands("L").unwrap();
    assert_eq!(rover.direction(), 130);

    let mut rover = RoverBuilder::new()
        .direction(400)
        .add_default_commands()
        .build();

    rover.execute_commands("R").unwrap();
    assert_eq!(rover.direction(), 310);
}

#[test]
fn test_failing_command_stops_batch() {
    // A negative start bypasses validation; a left turn that stays negative fails.
    let mut rover = RoverBuilder::new()
        .direction(-100)
        .add_default_commands()
        .build();

    let err = rover.execute_commands("FLF").unwrap_err();

    assert_eq!(err, RoverError::NegativeDirection { degrees: -10 });
    assert_eq!(rover.direction(), -100);
    let heading = (-100f64).to_radians();
    assert_near(rover.position(), (heading.cos(), heading.sin()));
}

#[test]
fn test_right_turn_recovers_negative_start() {
    let mut rover = RoverBuilder::new()
        .direction(-10)
        .add_default_commands()
        .build();

    rover.execute_commands("R").unwrap();

    assert_eq!(rover.direction(), 260);
}

#[test]
fn test_left_turn_adds_to_negative_start_before_wrapping() {
    let mut rover = RoverBuilder::new().direction(-10).build();

    rover.execute(Command::Turn(360)).unwrap();

    assert_eq!(rover.direction(), 350);
}

#[test]
fn test_left_turn_past_i32_max_keeps_remainder() {
    let mut rover = RoverBuilder::new().direction(i32::MAX).build();

    rover.execute(Command::Turn(10)).unwrap();

    let expected = ((i64::from(i32::MAX) + 10) % 360) as i32;
    assert_eq!(rover.direction(), expected);
}
