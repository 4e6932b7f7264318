//! Property-based tests for the dispatcher

use super::command::COMMANDS;
use super::*;
use proptest::prelude::*;

fn arb_unknown_token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,12}".prop_filter("must not be a command", |token| {
        COMMANDS.iter().all(|spec| spec.name != token.as_str())
    })
}

/// A command name followed by one or more extra words
fn arb_command_with_extra_words() -> impl Strategy<Value = String> {
    let names: Vec<&'static str> = COMMANDS.iter().map(|spec| spec.name).collect();
    (prop::sample::select(names), "[a-z0-9]{1,8}( [a-z0-9]{1,8}){0,2}")
        .prop_map(|(name, rest)| format!("{name} {rest}"))
}

fn arb_running_state() -> impl Strategy<Value = ShellState> {
    any::<bool>().prop_map(|started| ShellState::Running { started })
}

fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_unknown_token(),
        arb_command_with_extra_words(),
        Just("hello".to_string()),
        Just("help".to_string()),
        Just("advice calm".to_string()),
        Just("subjects".to_string()),
        Just("track".to_string()),
    ]
}

proptest! {
    #[test]
    fn unknown_tokens_never_change_state(
        state in arb_running_state(),
        token in arb_unknown_token(),
    ) {
        let result = transition(state, Command::parse(&token)).unwrap();
        prop_assert_eq!(result.new_state, state);
        prop_assert_eq!(result.effects.len(), 1);
        prop_assert!(matches!(result.effects[0], Effect::Reply(_)));
    }

    #[test]
    fn exit_terminates_exactly_once(lines in prop::collection::vec(arb_line(), 0..20)) {
        let mut state = ShellState::default();
        let mut terminations = 0;

        for line in lines.iter().map(String::as_str).chain(["exit", "exit", "hello"]) {
            match transition(state, Command::parse(line)) {
                Ok(result) => {
                    if !state.is_terminated() && result.new_state.is_terminated() {
                        terminations += 1;
                    }
                    state = result.new_state;
                }
                Err(err) => {
                    prop_assert_eq!(err, TransitionError::Terminated);
                    prop_assert!(state.is_terminated());
                }
            }
        }

        prop_assert_eq!(terminations, 1);
        prop_assert!(state.is_terminated());
    }

    #[test]
    fn unknown_input_does_not_leak_into_next_line(
        token in arb_unknown_token(),
        state in arb_running_state(),
    ) {
        let after_unknown = transition(state, Command::parse(&token)).unwrap().new_state;
        let direct = transition(state, Command::parse("hello")).unwrap();
        let via_unknown = transition(after_unknown, Command::parse("hello")).unwrap();

        prop_assert_eq!(Command::parse("hello"), Command::Hello);
        prop_assert_eq!(direct.new_state, via_unknown.new_state);
        prop_assert_eq!(direct.effects, via_unknown.effects);
    }

    #[test]
    fn only_exit_terminates(line in arb_line()) {
        let result = transition(ShellState::default(), Command::parse(&line)).unwrap();
        prop_assert!(!result.new_state.is_terminated());
    }

    #[test]
    fn extra_words_never_terminate(
        state in arb_running_state(),
        line in arb_command_with_extra_words(),
    ) {
        let result = transition(state, Command::parse(&line)).unwrap();
        prop_assert!(!result.new_state.is_terminated());
        prop_assert_ne!(Command::parse(&line), Command::Exit);
    }
}
