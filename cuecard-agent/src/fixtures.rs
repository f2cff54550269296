//! Demonstration scripts replayed by the scripted agents.
//!
//! The recorded observations are kept as captured, quirks included: the read
//! of `hello.sh` carries a trailing newline the write never added, and the
//! failed run reports `bash workspace/hello.sh` as its command.

use cuecard_core::{Action, AgentState, Observation, Script, Step};

const HELLO_SCRIPT: &str = "echo \"Hello, World!\"";
const HELLO_PATH: &str = "hello.sh";
const GOOGLE: &str = "https://google.com";
const GOTO_GOOGLE: &str = "goto(\"https://google.com\")";

pub fn hello_world_script() -> Script {
    Script::new(vec![
        Step::new(Action::add_task("None", "check the current directory")),
        Step::new(Action::add_task("0", "run ls")),
        Step::new(Action::modify_task("0", "in_progress")),
        Step::new(Action::message("Time to get started!")),
        Step::new(Action::cmd_run("echo \"foo\""))
            .observed(Observation::cmd_output("foo", "echo \"foo\"", 0)),
        Step::new(Action::file_write(HELLO_PATH, HELLO_SCRIPT))
            .observed(Observation::file_write(HELLO_PATH, HELLO_SCRIPT)),
        Step::new(Action::file_read(HELLO_PATH))
            .observed(Observation::file_read(HELLO_PATH, format!("{HELLO_SCRIPT}\n"))),
        Step::new(Action::cmd_run("bash hello.sh")).observed(missing_hello_output()),
        Step::new(Action::browse_url(GOOGLE)),
        Step::new(Action::browse_interactive(GOTO_GOOGLE)),
        Step::new(Action::reject()).observed(Observation::null()),
        Step::new(Action::finish_with_thought("Task completed"))
            .observed(Observation::agent_state_changed(AgentState::Finished)),
    ])
}

pub fn delegating_script() -> Script {
    Script::new(vec![
        Step::new(Action::message("Time to get started!")),
        Step::new(Action::cmd_run("echo \"foo\""))
            .observed(Observation::cmd_output("foo", "echo \"foo\"", 0)),
        Step::new(Action::file_write(HELLO_PATH, HELLO_SCRIPT))
            .observed(Observation::file_write(HELLO_PATH, HELLO_SCRIPT)),
        Step::new(Action::file_read(HELLO_PATH))
            .observed(Observation::file_read(HELLO_PATH, format!("{HELLO_SCRIPT}\n"))),
        Step::new(Action::cmd_run("bash hello.sh")).observed(missing_hello_output()),
        Step::new(Action::browse_url(GOOGLE)).observed(Observation::browser_output(
            "<html><body>Simulated Google page</body></html>",
            GOOGLE,
        )),
        Step::new(Action::browse_interactive(GOTO_GOOGLE)).observed(
            Observation::browser_output(
                "<html><body>Simulated Google page after interaction</body></html>",
                GOOGLE,
            ),
        ),
        Step::new(Action::reject()).observed(Observation::null()),
        Step::new(Action::finish_with_thought("Task completed"))
            .observed(Observation::agent_state_changed(AgentState::Finished)),
    ])
}

fn missing_hello_output() -> Observation {
    Observation::cmd_output(
        "bash: hello.sh: No such file or directory",
        "bash workspace/hello.sh",
        127,
    )
}
