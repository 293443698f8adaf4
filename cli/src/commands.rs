use std::io::Write;

use clap::{Parser, Subcommand};
use tracing::info;
use zulrah_core::presence::log_presence_error;
use zulrah_core::{
    BossObservation, EncounterInstance, LocalPoint, Pattern, PatternCatalog, SignalHandler,
    TrackerConfig, TrackerConfigExt, TrackerSignal,
};

use crate::context::CliContext;

#[derive(Parser, Debug)]
#[command(version, about = "zulrah tracker cli")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// An NPC spawned
    Spawn {
        index: u32,
        npc_id: u32,
        x: i32,
        y: i32,
        name: Option<String>,
    },
    /// The tracked boss changed form or position
    Update {
        index: u32,
        npc_id: u32,
        x: i32,
        y: i32,
        /// Boss is alternating attack styles
        #[arg(long)]
        jad: bool,
    },
    /// An NPC despawned
    Despawn { index: u32, name: Option<String> },
    /// Advance one or more game ticks
    Tick {
        #[arg(default_value_t = 1)]
        count: u32,
    },
    Status,
    Enable,
    Disable,
    Patterns,
    Config,
    SaveConfig,
    /// Forget the current encounter and all NPCs
    Reset,
    /// Run commands from a script file
    Replay { path: String },
    Exit,
}

/// Split and parse one REPL / script line.
pub fn parse_line(line: &str) -> Result<Option<Commands>, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "zulrah".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
    Ok(cli.command)
}

/// Execute a single command. Returns true when the caller should quit.
pub async fn run(command: Commands, ctx: &CliContext) -> Result<bool, String> {
    match command {
        Commands::Spawn {
            index,
            npc_id,
            x,
            y,
            name,
        } => spawn(ctx, index, BossObservation::new(npc_id, LocalPoint::new(x, y)), name).await,
        Commands::Update {
            index,
            npc_id,
            x,
            y,
            jad,
        } => {
            let observation = BossObservation::new(npc_id, LocalPoint::new(x, y));
            let observation = if jad { observation.alternating() } else { observation };
            update(ctx, index, observation).await
        }
        Commands::Despawn { index, name } => despawn(ctx, index, name).await,
        Commands::Tick { count } => tick(ctx, count).await,
        Commands::Status => show_status(ctx).await,
        Commands::Enable => set_enabled(ctx, true).await,
        Commands::Disable => set_enabled(ctx, false).await,
        Commands::Patterns => list_patterns(),
        Commands::Config => show_settings(ctx).await,
        Commands::SaveConfig => save_settings(ctx).await?,
        Commands::Reset => ctx.reset_session().await,
        Commands::Replay { .. } => return Err("replay is only available at the prompt".to_string()),
        Commands::Exit => {
            exit();
            return Ok(true);
        }
    }
    Ok(false)
}

/// Read a script file and run each of its lines.
pub async fn replay(path: &str, ctx: &CliContext) -> Result<(), String> {
    info!(path, "Replaying script");
    let script = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("failed to read {path}: {e}"))?;
    run_script(&script, ctx).await
}

/// Run newline-separated commands. Blank lines and `#` comments are skipped.
pub async fn run_script(script: &str, ctx: &CliContext) -> Result<(), String> {
    for (line_num, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(command) = parse_line(line).map_err(|e| format!("line {}: {e}", line_num + 1))?
        else {
            continue;
        };
        if matches!(command, Commands::Replay { .. }) {
            return Err(format!("line {}: nested replay is not supported", line_num + 1));
        }
        if run(command, ctx).await? {
            break;
        }
    }
    Ok(())
}

async fn spawn(ctx: &CliContext, index: u32, observation: BossObservation, name: Option<String>) {
    let mut session = ctx.session.write().await;
    if log_presence_error(session.presence.on_npc_spawned(index, name.as_deref(), observation)) {
        println!("npc {index} is the boss");
    }
}

async fn update(ctx: &CliContext, index: u32, observation: BossObservation) {
    let mut session = ctx.session.write().await;
    if !session.presence.on_npc_changed(index, observation) {
        println!("npc {index} is not the tracked boss");
    }
}

async fn despawn(ctx: &CliContext, index: u32, name: Option<String>) {
    let mut session = ctx.session.write().await;
    if log_presence_error(session.presence.on_npc_despawned(index, name.as_deref())) {
        println!("boss npc {index} despawned");
    }
}

async fn tick(ctx: &CliContext, count: u32) {
    let mut session = ctx.session.write().await;
    let session = &mut *session;

    for _ in 0..count {
        session.ticks += 1;
        let signals = session.tracker.tick(session.presence.observation());
        SignalPrinter { tick: session.ticks }.handle_signals(&signals, session.tracker.instance());
    }
}

async fn set_enabled(ctx: &CliContext, enabled: bool) {
    ctx.config.write().await.enabled = enabled;
    ctx.session.write().await.tracker.set_enabled(enabled);
    println!("tracking {}", if enabled { "enabled" } else { "paused" });
}

pub async fn show_status(ctx: &CliContext) {
    let show_next_phase = ctx.config.read().await.show_next_phase;
    let session = ctx.session.read().await;
    let tracker = &session.tracker;

    if tracker.instance().is_none() {
        let state = if tracker.is_enabled() { "enabled" } else { "paused" };
        println!("no encounter (tracking {state}, tick {})", session.ticks);
        return;
    }

    println!("tick:     {}", session.ticks);
    println!("stage:    {}", tracker.current_stage());
    println!("phase:    {}", display_or_dash(tracker.current_phase()));
    println!(
        "pattern:  {}",
        tracker.matched_pattern().map_or("unknown", Pattern::id)
    );
    println!("prayer:   {}", display_or_dash(tracker.recommended_response()));
    println!("stand:    {}", display_or_dash(tracker.stand_location()));
    if show_next_phase {
        println!("next:     {}", display_or_dash(tracker.next_phase()));
    }
}

fn list_patterns() {
    for pattern in PatternCatalog::standard().patterns() {
        println!("Pattern {} ({} stages)", pattern.id(), pattern.len());
        for (stage, entry) in pattern.stages().iter().enumerate() {
            println!("  {stage:>2}  {:<20} {}", entry.phase.to_string(), entry.stand);
        }
    }
}

async fn show_settings(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("enabled:         {}", config.enabled);
    println!("boss name:       {}", config.boss_name);
    println!("show next phase: {}", config.show_next_phase);
    match TrackerConfig::config_path() {
        Ok(path) => println!("config file:     {}", path.display()),
        Err(e) => println!("config file:     unavailable ({e})"),
    }
}

async fn save_settings(ctx: &CliContext) -> Result<(), String> {
    ctx.config.read().await.save().map_err(|e| e.to_string())?;
    println!("configuration saved");
    Ok(())
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Prints tracker signals as they happen
struct SignalPrinter {
    tick: u64,
}

impl SignalHandler for SignalPrinter {
    fn handle_signal(&mut self, signal: &TrackerSignal, encounter: Option<&EncounterInstance<'_>>) {
        let tick = self.tick;
        match signal {
            TrackerSignal::EncounterStarted { start } => {
                println!("[{tick}] encounter started at ({}, {})", start.x, start.y);
            }
            TrackerSignal::EncounterEnded { stage, pattern } => {
                println!(
                    "[{tick}] encounter ended at stage {stage} (pattern {})",
                    pattern.unwrap_or("unknown")
                );
            }
            TrackerSignal::PhaseChanged {
                old_phase,
                new_phase,
                stage,
            } => {
                let prayer = encounter.and_then(EncounterInstance::recommended_response);
                println!(
                    "[{tick}] stage {stage}: {old_phase} -> {new_phase} (pray: {})",
                    display_or_dash(prayer)
                );
            }
            TrackerSignal::PatternIdentified { pattern, stage } => {
                println!("[{tick}] pattern {pattern} identified at stage {stage}");
            }
            TrackerSignal::PatternReset { pattern } => {
                println!("[{tick}] pattern {pattern} complete, cycle restarting");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> CliContext {
        CliContext::with_config(TrackerConfig::default())
    }

    #[test]
    fn parse_spawn_line() {
        let command = parse_line("spawn 4 2042 6720 7616 Zulrah").unwrap();
        assert_eq!(
            command,
            Some(Commands::Spawn {
                index: 4,
                npc_id: 2042,
                x: 6720,
                y: 7616,
                name: Some("Zulrah".to_string()),
            })
        );
    }

    #[test]
    fn parse_update_with_jad_flag() {
        let command = parse_line("update 4 2042 5440 7360 --jad").unwrap();
        assert!(matches!(command, Some(Commands::Update { jad: true, .. })));
    }

    #[test]
    fn parse_rejects_bad_quoting() {
        assert!(parse_line("spawn 4 2042 6720 7616 \"Zulrah").is_err());
    }

    #[tokio::test]
    async fn script_identifies_rotation() {
        let ctx = test_context();
        let script = "
            # rotation A opening
            spawn 1 2042 6720 7616 Zulrah
            tick
            update 1 2043 6720 7616
            tick 3
            update 1 2044 6720 7616
            tick
            update 1 2042 6720 6208
            tick
        ";
        run_script(script, &ctx).await.unwrap();

        let session = ctx.session.read().await;
        assert_eq!(session.ticks, 6);
        assert_eq!(session.tracker.current_stage(), 3);
        assert_eq!(session.tracker.matched_pattern().map(Pattern::id), Some("A"));
    }

    #[tokio::test]
    async fn unnamed_spawn_is_ignored() {
        let ctx = test_context();
        run_script("spawn 1 2042 6720 7616\ntick", &ctx).await.unwrap();

        let session = ctx.session.read().await;
        assert!(!session.presence.is_present());
        assert!(session.tracker.instance().is_none());
    }

    #[tokio::test]
    async fn script_rejects_nested_replay() {
        let ctx = test_context();
        let err = run_script("tick\nreplay other.txt", &ctx).await.unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[tokio::test]
    async fn bundled_rotation_script_completes_a_cycle() {
        let ctx = test_context();
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/rotation_a.txt");
        let script = tokio::fs::read_to_string(path).await.unwrap();
        let sections: Vec<&str> = script.split("\nstatus\n").collect();
        assert_eq!(sections.len(), 4, "script sections are delimited by status");

        run_script(sections[0], &ctx).await.unwrap();
        {
            let session = ctx.session.read().await;
            assert_eq!(session.tracker.current_stage(), 3);
            assert_eq!(session.tracker.matched_pattern().map(Pattern::id), Some("A"));
        }

        run_script(sections[1], &ctx).await.unwrap();
        {
            let session = ctx.session.read().await;
            let opening = PatternCatalog::standard().get("A").unwrap().get(0);
            assert_eq!(session.ticks, 11);
            assert_eq!(session.tracker.current_stage(), 0, "cycle restarted");
            assert!(session.tracker.matched_pattern().is_none());
            assert_eq!(session.tracker.current_phase(), Some(opening));
        }

        run_script(sections[2], &ctx).await.unwrap();
        let session = ctx.session.read().await;
        assert!(session.tracker.instance().is_none());
        assert!(!session.presence.is_present());
    }

    #[tokio::test]
    async fn bundled_rotation_script_replays() {
        let ctx = test_context();
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/rotation_a.txt");
        replay(path, &ctx).await.unwrap();

        let session = ctx.session.read().await;
        assert_eq!(session.ticks, 12);
        assert!(session.tracker.instance().is_none());
        assert!(!session.presence.is_present());
    }

    #[tokio::test]
    async fn reset_forgets_boss_and_encounter() {
        let ctx = test_context();
        run_script("spawn 1 2042 6720 7616 Zulrah\ntick\nreset\ntick", &ctx)
            .await
            .unwrap();

        let session = ctx.session.read().await;
        assert_eq!(session.ticks, 1);
        assert!(!session.presence.is_present());
        assert!(session.tracker.instance().is_none());
    }
}
