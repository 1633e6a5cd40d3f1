use clap::{Parser, Subcommand};
use reable_core::*;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "reable")]
#[command(about = "Guided physiotherapy exercise planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available focus areas
    Conditions,

    /// Generate a personalized exercise plan
    Plan {
        /// Focus area title (e.g. "Joint Pain")
        #[arg(long)]
        condition: String,

        /// Pain/difficulty level (low, medium, intense)
        #[arg(long)]
        intensity: Option<String>,

        /// Current mobility (low, medium, good)
        #[arg(long)]
        mobility: Option<String>,

        /// Daily time budget in minutes (10, 15, 20, 30)
        #[arg(long)]
        time: Option<String>,

        /// Emit the plan as JSON instead of cards
        #[arg(long)]
        json: bool,

        /// Apply feedback non-interactively (satisfied, easier, different);
        /// may be repeated and is applied in order
        #[arg(long)]
        feedback: Vec<String>,

        /// Skip the interactive feedback prompt
        #[arg(long)]
        no_input: bool,
    },

    /// Show the simulated progress dashboard
    Dashboard {
        /// Focus area title (e.g. "Joint Pain")
        #[arg(long)]
        condition: String,

        /// Exercise count shown in the summary; derived from a fresh plan
        /// when omitted
        #[arg(long)]
        exercises: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    reable_core::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Conditions) | None => cmd_conditions(),
        Some(Commands::Plan {
            condition,
            intensity,
            mobility,
            time,
            json,
            feedback,
            no_input,
        }) => cmd_plan(condition, intensity, mobility, time, json, feedback, no_input),
        Some(Commands::Dashboard {
            condition,
            exercises,
        }) => cmd_dashboard(condition, exercises),
    }
}

fn cmd_conditions() -> Result<()> {
    println!("\nChoose your focus area:\n");
    for condition in Condition::ALL {
        println!(
            "  {}  {:<16} {}",
            condition.icon(),
            condition.title(),
            condition.subtitle()
        );
    }
    println!("\nGenerate a plan with: reable plan --condition \"<title>\"");
    Ok(())
}

fn cmd_plan(
    condition: String,
    intensity: Option<String>,
    mobility: Option<String>,
    time: Option<String>,
    json: bool,
    feedback: Vec<String>,
    no_input: bool,
) -> Result<()> {
    let config = Config::load()?;

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let condition = parse_condition(&condition)?;
    let intensity = match intensity {
        Some(value) => parse_intensity(&value)?,
        None => config.defaults.intensity,
    };
    let mobility = match mobility {
        Some(value) => parse_mobility(&value)?,
        None => config.defaults.mobility,
    };
    let daily_time = match time {
        Some(value) => parse_daily_time(&value)?,
        None => config.defaults.daily_time,
    };

    let mut session = PlanSession::new(catalog, condition, intensity, mobility, daily_time);

    // Non-interactive feedback chain (testing and scripting hook)
    for action in &feedback {
        match parse_feedback(action)? {
            FeedbackAction::MarkSatisfied => session.mark_satisfied(),
            FeedbackAction::RequestEasier => session.request_easier(),
            FeedbackAction::RequestDifferent => session.request_different(),
        }
    }

    if json {
        print_plan_json(&session)?;
        return Ok(());
    }

    display_plan(&session);

    if no_input || !feedback.is_empty() {
        return Ok(());
    }

    // Feedback loop - adjustments regenerate and redisplay
    loop {
        match prompt_feedback()? {
            PromptAction::Satisfied => {
                session.mark_satisfied();
                println!("\n🌟 Great to hear it's helping!");
                println!("   Consistency is key to recovery. Keep going!");
                break;
            }
            PromptAction::Easier => {
                session.request_easier();
                println!("\n✨ Plan adjusted for you\n");
                display_plan(&session);
            }
            PromptAction::Different => {
                session.request_different();
                println!("\n✨ Plan adjusted for you\n");
                display_plan(&session);
            }
            PromptAction::Quit => break,
        }
    }

    Ok(())
}

fn cmd_dashboard(condition: String, exercises: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    let condition = parse_condition(&condition)?;

    let exercise_count = match exercises {
        Some(count) => count,
        None => {
            let catalog = get_default_catalog();
            let session = PlanSession::new(
                catalog,
                condition,
                config.defaults.intensity,
                config.defaults.mobility,
                config.defaults.daily_time,
            );
            session.plan().len()
        }
    };

    let summary = ProgressSummary::from_config(condition, exercise_count, &config.dashboard);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  PROGRESS DASHBOARD");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}  {}", condition.icon(), condition.title());
    println!();
    println!("  Frequency: {}x daily", summary.daily_frequency);
    println!("  Duration:  {} days", summary.duration_days);
    println!("  Exercises: {} total", summary.exercise_count);
    println!();
    print_meter("Plan Completion", summary.completion_percent());
    print_meter("Relief Rate", summary.effectiveness_percent());
    println!();
    println!("  Recovery Pathway:");
    for stage in recovery_pathway() {
        let marker = if stage.completed { "✓" } else { "○" };
        println!("    {} {:<12} {}", marker, stage.title, stage.detail);
    }
    println!();

    Ok(())
}

fn print_meter(label: &str, percent: u32) {
    const WIDTH: u32 = 20;
    let filled = (percent * WIDTH / 100).min(WIDTH);
    let bar: String = (0..WIDTH)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();
    println!("  {:<16} {} {:>3}%", label, bar, percent);
}

fn display_plan(session: &PlanSession<'_>) {
    let plan = session.plan();
    let constraints = session.constraints();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  🎯 YOUR PERSONALIZED PLAN");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  {}  {}  ·  💪 {}  ·  ⏱ {} min",
        constraints.condition.icon(),
        constraints.condition.title(),
        constraints.intensity.label(),
        plan.total_minutes()
    );

    if session.feedback() == FeedbackState::Adjusted {
        println!("  ✨ Plan adjusted for you");
    }

    if plan.is_empty() {
        println!();
        println!("  No exercises match the current constraints.");
        println!("  Try a longer daily time or a different focus area.");
        return;
    }

    for (index, exercise) in plan.exercises.iter().enumerate() {
        println!();
        println!(
            "  {}. {} ({} min, {})",
            index + 1,
            exercise.name,
            exercise.duration_minutes,
            exercise.difficulty.label()
        );
        println!("     💡 {}", exercise.benefits);
        println!("     🛠 Equipment: {}", exercise.equipment);

        for (step_number, step) in exercise.steps.iter().enumerate() {
            println!("       {}. {}", step_number + 1, step);
        }

        for precaution in &exercise.precautions {
            println!("       ⚠ {}", precaution);
        }

        if let Some(ref url) = exercise.reference_url {
            println!("     🎥 {}", url);
        }
    }

    println!();
}

fn print_plan_json(session: &PlanSession<'_>) -> Result<()> {
    let plan = session.plan();
    let constraints = session.constraints();
    let output = serde_json::json!({
        "condition": constraints.condition.title(),
        "intensity": constraints.intensity,
        "mobility": constraints.mobility,
        "time_budget_minutes": constraints.daily_time.minutes(),
        "total_minutes": plan.total_minutes(),
        "feedback": session.feedback(),
        "exercises": plan.exercises,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

enum PromptAction {
    Satisfied,
    Easier,
    Different,
    Quit,
}

fn prompt_feedback() -> Result<PromptAction> {
    println!("─────────────────────────────────────────");
    println!("How is this plan working?");
    println!("  Enter       Helping me");
    println!("  'e' + Enter Too difficult - make it easier");
    println!("  'd' + Enter Not working - try different exercises");
    println!("  'q' + Enter Quit");
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let action = match input.trim().to_lowercase().as_str() {
        "e" => PromptAction::Easier,
        "d" => PromptAction::Different,
        "q" => PromptAction::Quit,
        _ => PromptAction::Satisfied,
    };

    Ok(action)
}

fn parse_condition(value: &str) -> Result<Condition> {
    Condition::ALL
        .iter()
        .copied()
        .find(|c| c.title().eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "Unknown condition '{}'. Run `reable conditions` for the list.",
                value
            ))
        })
}

fn parse_intensity(value: &str) -> Result<IntensityLevel> {
    match value.trim().to_lowercase().as_str() {
        "low" => Ok(IntensityLevel::Low),
        "medium" => Ok(IntensityLevel::Medium),
        "intense" => Ok(IntensityLevel::Intense),
        other => Err(Error::InvalidArgument(format!(
            "Unknown intensity '{}' (expected low, medium, or intense)",
            other
        ))),
    }
}

fn parse_mobility(value: &str) -> Result<MobilityLevel> {
    match value.trim().to_lowercase().as_str() {
        "low" => Ok(MobilityLevel::Low),
        "medium" => Ok(MobilityLevel::Medium),
        "good" => Ok(MobilityLevel::Good),
        other => Err(Error::InvalidArgument(format!(
            "Unknown mobility '{}' (expected low, medium, or good)",
            other
        ))),
    }
}

fn parse_daily_time(value: &str) -> Result<DailyTime> {
    match value.trim().trim_end_matches("min").trim() {
        "10" => Ok(DailyTime::Ten),
        "15" => Ok(DailyTime::Fifteen),
        "20" => Ok(DailyTime::Twenty),
        "30" => Ok(DailyTime::Thirty),
        other => Err(Error::InvalidArgument(format!(
            "Unknown time budget '{}' (expected 10, 15, 20, or 30)",
            other
        ))),
    }
}

fn parse_feedback(value: &str) -> Result<FeedbackAction> {
    match value.trim().to_lowercase().as_str() {
        "satisfied" => Ok(FeedbackAction::MarkSatisfied),
        "easier" => Ok(FeedbackAction::RequestEasier),
        "different" => Ok(FeedbackAction::RequestDifferent),
        other => Err(Error::InvalidArgument(format!(
            "Unknown feedback '{}' (expected satisfied, easier, or different)",
            other
        ))),
    }
}
