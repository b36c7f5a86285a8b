use std::env;
use std::io::{self, Write};
use vecmat::ops;

pub enum Command {
    Unit { vector: Vec<f64> },
    Angle { v1: Vec<f64>, v2: Vec<f64> },
    Orthogonal { v1: Vec<f64>, v2: Vec<f64> },
    Parallel { v1: Vec<f64>, v2: Vec<f64> },
    Combine { vectors: Vec<Vec<f64>>, coefficients: Vec<f64> },
    Solve { a: Vec<Vec<f64>>, b: Vec<f64> },
    Transpose { matrix: Vec<Vec<f64>> },
    Multiply { m1: Vec<Vec<f64>>, m2: Vec<Vec<f64>> },
}

/// Parse a command from a provided argument vector
/// This is used both for command-line args and REPL input
pub fn parse_command_from_args(args: &[String]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("No command provided. Use: unit, angle, orthogonal, parallel, combine, solve, transpose, multiply".to_string());
    }

    let command = &args[1];

    match command.as_str() {
        "unit" => parse_unit(args),
        "angle" => parse_angle(args),
        "orthogonal" => parse_orthogonal(args),
        "parallel" => parse_parallel(args),
        "combine" => parse_combine(args),
        "solve" => parse_solve(args),
        "transpose" => parse_transpose(args),
        "multiply" => parse_multiply(args),
        _ => Err(format!("Unknown command: {}. Available: unit, angle, orthogonal, parallel, combine, solve, transpose, multiply", command)),
    }
}

/// Parse a JSON vector literal like [1,2,3]
fn parse_vector(arg: &str) -> Result<Vec<f64>, String> {
    serde_json::from_str(arg)
        .map_err(|_| format!("Could not parse '{}' as a vector like [1,2,3]", arg))
}

/// Parse a JSON matrix literal like [[1,2],[3,4]]
fn parse_matrix(arg: &str) -> Result<Vec<Vec<f64>>, String> {
    serde_json::from_str(arg)
        .map_err(|_| format!("Could not parse '{}' as a matrix like [[1,2],[3,4]]", arg))
}

/// Shared parsing for the commands that take two vector operands
fn parse_vector_pair(args: &[String], command: &str) -> Result<(Vec<f64>, Vec<f64>), String> {
    // args[0] = program name
    // args[1] = command
    // args[2] = first vector (required)
    // args[3] = second vector (required)
    if args.len() < 4 {
        return Err(format!(
            "'{}' command requires two vectors. Usage: vecmat {} [1,0] [0,1]",
            command, command
        ));
    }

    Ok((parse_vector(&args[2])?, parse_vector(&args[3])?))
}

/// Parse the 'unit' command
/// Usage: vecmat unit <x1> <x2> ...
fn parse_unit(args: &[String]) -> Result<Command, String> {
    // args[0] = program name
    // args[1] = "unit"
    // args[2..] = vector components (required, at least 1)
    if args.len() < 3 {
        return Err("'unit' command requires vector components. Usage: vecmat unit <x1> <x2> ...".to_string());
    }

    let vector: Result<Vec<f64>, _> = args[2..].iter()
        .map(|s| s.parse::<f64>())
        .collect();

    match vector {
        Ok(v) => Ok(Command::Unit { vector: v }),
        Err(_) => Err("Failed to parse vector components as numbers".to_string()),
    }
}

/// Parse the 'angle' command
/// Usage: vecmat angle <v1> <v2>
fn parse_angle(args: &[String]) -> Result<Command, String> {
    let (v1, v2) = parse_vector_pair(args, "angle")?;
    Ok(Command::Angle { v1, v2 })
}

/// Parse the 'orthogonal' command
/// Usage: vecmat orthogonal <v1> <v2>
fn parse_orthogonal(args: &[String]) -> Result<Command, String> {
    let (v1, v2) = parse_vector_pair(args, "orthogonal")?;
    Ok(Command::Orthogonal { v1, v2 })
}

/// Parse the 'parallel' command
/// Usage: vecmat parallel <v1> <v2>
fn parse_parallel(args: &[String]) -> Result<Command, String> {
    let (v1, v2) = parse_vector_pair(args, "parallel")?;
    Ok(Command::Parallel { v1, v2 })
}

/// Parse the 'combine' command
/// Usage: vecmat combine <vectors> <coefficients>
fn parse_combine(args: &[String]) -> Result<Command, String> {
    if args.len() < 4 {
        return Err("'combine' command requires a vector list and coefficients. Usage: vecmat combine [[1,0],[0,1]] [2,3]".to_string());
    }

    let vectors = parse_matrix(&args[2])?;
    let coefficients = parse_vector(&args[3])?;
    Ok(Command::Combine { vectors, coefficients })
}

/// Parse the 'solve' command
/// Usage: vecmat solve <A> <b>
fn parse_solve(args: &[String]) -> Result<Command, String> {
    if args.len() < 4 {
        return Err("'solve' command requires a matrix and a right-hand side. Usage: vecmat solve [[1,0],[0,1]] [5,7]".to_string());
    }

    let a = parse_matrix(&args[2])?;
    let b = parse_vector(&args[3])?;
    Ok(Command::Solve { a, b })
}

/// Parse the 'transpose' command
/// Usage: vecmat transpose <matrix>
fn parse_transpose(args: &[String]) -> Result<Command, String> {
    if args.len() < 3 {
        return Err("'transpose' command requires a matrix. Usage: vecmat transpose [[1,2],[3,4]]".to_string());
    }

    let matrix = parse_matrix(&args[2])?;
    Ok(Command::Transpose { matrix })
}

/// Parse the 'multiply' command
/// Usage: vecmat multiply <m1> <m2>
fn parse_multiply(args: &[String]) -> Result<Command, String> {
    if args.len() < 4 {
        return Err("'multiply' command requires two matrices. Usage: vecmat multiply [[1,2]] [[1],[1]]".to_string());
    }

    let m1 = parse_matrix(&args[2])?;
    let m2 = parse_matrix(&args[3])?;
    Ok(Command::Multiply { m1, m2 })
}

/// REPL mode - interactive session
pub fn run_repl() {
    println!("vecmat - Vector/Matrix Operations");
    println!("Type 'help' for commands, 'exit' or 'quit' to quit\n");

    loop {
        print!("vecmat> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => {}
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if input == "exit" || input == "quit" {
            println!("Goodbye!");
            break;
        }

        if input == "help" {
            print_help();
            continue;
        }

        let mut args: Vec<String> = vec!["vecmat".to_string()];
        args.extend(input.split_whitespace().map(|s| s.to_string()));

        let command = match parse_command_from_args(&args) {
            Ok(cmd) => cmd,
            Err(error) => {
                eprintln!("Error: {}", error);
                continue;
            }
        };

        execute_command(command);
    }
}

/// Single-command mode - parse argv, run one operation, exit
/// Usage: vecmat <command> [args...]
pub fn run_single_command() {
    let args: Vec<String> = env::args().collect();

    let command = match parse_command_from_args(&args) {
        Ok(cmd) => cmd,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    if !execute_command(command) {
        std::process::exit(1);
    }
}

/// Run one command and print its outcome; returns false on failure so
/// single-command mode can exit non-zero
fn execute_command(command: Command) -> bool {
    match command {
        Command::Unit { vector } => match ops::unit_vector(&vector) {
            Ok(unit) => {
                println!("Unit vector: {:?}", unit);
                true
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                false
            }
        },

        Command::Angle { v1, v2 } => match ops::angle_between(&v1, &v2) {
            Ok(angle) => {
                println!("Angle: {:.4} degrees", angle);
                true
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                false
            }
        },

        Command::Orthogonal { v1, v2 } => match ops::orthogonality(&v1, &v2) {
            Ok((orthogonal, dot_product)) => {
                println!("Orthogonal: {} (dot product: {:.4})", orthogonal, dot_product);
                true
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                false
            }
        },

        Command::Parallel { v1, v2 } => match ops::parallelism(&v1, &v2) {
            Ok((parallel, cross_product)) => {
                println!("Parallel: {} (cross product: {:?})", parallel, cross_product);
                true
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                false
            }
        },

        Command::Combine { vectors, coefficients } => {
            match ops::linear_combination(&vectors, &coefficients) {
                Ok(result) => {
                    println!("Linear combination: {:?}", result);
                    true
                }
                Err(error) => {
                    eprintln!("Error: {}", error);
                    false
                }
            }
        }

        Command::Solve { a, b } => match ops::solve_system(&a, &b) {
            Ok(solution) => {
                println!("Solution: {:?}", solution);
                true
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                false
            }
        },

        Command::Transpose { matrix } => match ops::matrix_transpose(&matrix) {
            Ok(transpose) => {
                println!("Transpose: {:?}", transpose);
                true
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                false
            }
        },

        Command::Multiply { m1, m2 } => match ops::matrix_multiply(&m1, &m2) {
            Ok(product) => {
                println!("Product: {:?}", product);
                true
            }
            Err(error) => {
                eprintln!("Error: {}", error);
                false
            }
        },
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  unit <x1> <x2> ...          - Unit vector from components");
    println!("  angle <v1> <v2>             - Angle in degrees, e.g. angle [1,0] [0,1]");
    println!("  orthogonal <v1> <v2>        - Orthogonality check plus dot product");
    println!("  parallel <v1> <v2>          - Parallelism check plus cross product");
    println!("  combine <vectors> <coeffs>  - e.g. combine [[1,0],[0,1]] [2,3]");
    println!("  solve <A> <b>               - e.g. solve [[1,0],[0,1]] [5,7]");
    println!("  transpose <matrix>          - e.g. transpose [[1,2],[3,4]]");
    println!("  multiply <m1> <m2>          - e.g. multiply [[1,2]] [[1],[1]]");
    println!("  help                        - Show this help");
    println!("  exit, quit                  - Exit the program");
    println!("\nVector and matrix operands are JSON literals without spaces.");
}
