//! Interactive prompt loop.
//!
//! Asks for an origin, a destination and an algorithm, prints the route or
//! the failure message, then asks whether to continue. End of input stops
//! the loop at any prompt.

use std::io::{BufRead, Write};

use anyhow::Result;

use wayfinder_lib::{plan_route, Graph, RouteRequest};

use crate::output::algorithm_label;

const SEPARATOR: &str = "-------------------------------------------------";

const MENU: &str = "Select an algorithm. (Enter option number)
1. Breadth First Search
2. Depth First Search
3. Iterative Deepening Search
Enter your choice:\t ";

/// Run the prompt loop until the user declines to continue or input ends.
pub fn run_interactive<R: BufRead, W: Write>(
    graph: &Graph,
    input: R,
    output: &mut W,
) -> Result<()> {
    let mut prompt = Prompt { input, output };

    loop {
        writeln!(prompt.output, "\n\n{SEPARATOR}\n")?;
        let Some(origin) = prompt.ask("Enter name of the city of origin: ")? else {
            break;
        };
        let Some(destination) = prompt.ask("Enter name of the destination city: ")? else {
            break;
        };
        let Some(choice) = prompt.ask(MENU)? else {
            break;
        };

        let request = match choice.parse::<u8>() {
            Ok(1) => Some(RouteRequest::bfs(origin, destination)),
            Ok(2) => Some(RouteRequest::dfs(origin, destination)),
            Ok(3) => {
                let Some(step) = prompt.ask("Enter step size for iterative deepening: ")? else {
                    break;
                };
                match step.parse::<usize>() {
                    Ok(step_size) => Some(RouteRequest::iterative_deepening(
                        origin,
                        destination,
                        step_size,
                    )),
                    Err(_) => {
                        writeln!(prompt.output, "Select valid options\n")?;
                        None
                    }
                }
            }
            _ => {
                writeln!(prompt.output, "Select valid options\n")?;
                None
            }
        };

        if let Some(request) = request {
            let result = match plan_route(graph, &request) {
                Ok(plan) => plan.to_string(),
                Err(err) => err.to_string(),
            };
            writeln!(
                prompt.output,
                "\n{}: \t{}\n",
                algorithm_label(request.algorithm),
                result
            )?;
        }

        match prompt.ask("Do you want to continue (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    prompt.output.flush()?;
    Ok(())
}

struct Prompt<'w, R, W> {
    input: R,
    output: &'w mut W,
}

impl<R: BufRead, W: Write> Prompt<'_, R, W> {
    /// Print `question` and read one trimmed line; `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
