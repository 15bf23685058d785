//! Quiz Maze - terminal board game.
//!
//! Roll the dice, cross the maze, answer quiz questions, spin the reward
//! wheel, and race the clock to the goal tile.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use quizmaze::build_info;
use quizmaze::constants::UI_POLL_INTERVAL_MS;
use quizmaze::game_logic::{self, RunSummary};
use quizmaze::game_state::RunState;
use quizmaze::leaderboard::LeaderboardStore;
use quizmaze::maze::Maze;
use quizmaze::movement_logic::{MoveEvent, MovementPhase, SuspendReason};
use quizmaze::question_generation::{load_question_bank, GenerationConfig};
use quizmaze::questions::{Question, QuestionBank};
use quizmaze::quiz_logic::QuizOutcome;
use quizmaze::ui::{
    game_scene, leaderboard_scene, menu_scene, name_input_scene::NameInputScreen, quiz_scene,
    result_scene, wheel_scene,
};
use quizmaze::wheel::WheelOutcome;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

enum Screen {
    Menu,
    Instructions,
    NameInput,
    Game,
    Result,
    Leaderboard,
}

enum Modal {
    Quiz {
        question: Question,
        outcome: Option<QuizOutcome>,
    },
    Wheel {
        result: Option<&'static WheelOutcome>,
    },
}

struct App {
    screen: Screen,
    menu_index: usize,
    name_screen: NameInputScreen,
    maze: Maze,
    bank: QuestionBank,
    store: LeaderboardStore,
    run: Option<RunState>,
    modal: Option<Modal>,
    last_roll: Option<u32>,
    status: String,
    summary: Option<RunSummary>,
    rng: rand::rngs::ThreadRng,
    should_quit: bool,
}

impl App {
    fn new(maze: Maze, bank: QuestionBank, store: LeaderboardStore) -> Self {
        Self {
            screen: Screen::Menu,
            menu_index: 0,
            name_screen: NameInputScreen::new(),
            maze,
            bank,
            store,
            run: None,
            modal: None,
            last_roll: None,
            status: String::new(),
            summary: None,
            rng: rand::thread_rng(),
            should_quit: false,
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "quizmaze {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Quiz Maze - Terminal Board Game\n");
                println!("Usage: quizmaze [--version | --help]\n");
                println!("Set QUIZMAZE_API_KEY to enable generated quiz questions;");
                println!("the curated set is used otherwise.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'quizmaze --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Question bank is loaded once at startup; remote failures fall back
    // to the curated set inside load_question_bank.
    let bank = load_question_bank(&GenerationConfig::default());
    let app = App::new(Maze::standard(), bank, LeaderboardStore::open());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, app.menu_index),
        Screen::Instructions => menu_scene::render_instructions(frame, area),
        Screen::NameInput => app.name_screen.draw(frame, area),
        Screen::Game => {
            if let Some(run) = &app.run {
                game_scene::render_game(
                    frame,
                    area,
                    run,
                    &app.maze,
                    now(),
                    app.last_roll,
                    &app.status,
                );
            }
            match &app.modal {
                Some(Modal::Quiz { question, outcome }) => {
                    quiz_scene::render_quiz(frame, area, question, outcome.as_ref());
                }
                Some(Modal::Wheel { result }) => {
                    wheel_scene::render_wheel(frame, area, *result);
                }
                None => {}
            }
        }
        Screen::Result => {
            if let (Some(summary), Some(run)) = (&app.summary, &app.run) {
                result_scene::render_result(frame, area, &run.player.name, summary);
            }
        }
        Screen::Leaderboard => leaderboard_scene::render_leaderboard(frame, area, &app.store),
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Menu => handle_menu_key(app, code),
        Screen::Instructions => {
            if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                app.screen = Screen::Menu;
            }
        }
        Screen::NameInput => handle_name_input_key(app, code),
        Screen::Game => handle_game_key(app, code),
        Screen::Result => match code {
            KeyCode::Enter | KeyCode::Esc => app.screen = Screen::Menu,
            KeyCode::Char('l') => app.screen = Screen::Leaderboard,
            _ => {}
        },
        Screen::Leaderboard => match code {
            KeyCode::Char('c') => app.store.clear(),
            KeyCode::Esc | KeyCode::Enter => app.screen = Screen::Menu,
            _ => {}
        },
    }
}

fn handle_menu_key(app: &mut App, code: KeyCode) {
    let item_count = menu_scene::MENU_ITEMS.len();
    match code {
        KeyCode::Up => app.menu_index = (app.menu_index + item_count - 1) % item_count,
        KeyCode::Down => app.menu_index = (app.menu_index + 1) % item_count,
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Enter => match app.menu_index {
            0 => {
                app.name_screen = NameInputScreen::new();
                app.screen = Screen::NameInput;
            }
            1 => app.screen = Screen::Instructions,
            2 => app.screen = Screen::Leaderboard,
            _ => app.should_quit = true,
        },
        _ => {}
    }
}

fn handle_name_input_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.screen = Screen::Menu,
        KeyCode::Tab => app.name_screen.next_character(),
        KeyCode::Backspace => app.name_screen.pop_char(),
        KeyCode::Enter => {
            if let Some(name) = app.name_screen.submit() {
                let character = app.name_screen.character();
                app.run = Some(game_logic::start_run(name, character, now()));
                app.modal = None;
                app.last_roll = None;
                app.summary = None;
                app.status = "Press Space to roll".to_string();
                app.screen = Screen::Game;
            }
        }
        KeyCode::Char(c) => app.name_screen.push_char(c),
        _ => {}
    }
}

fn handle_game_key(app: &mut App, code: KeyCode) {
    if app.modal.is_some() {
        handle_modal_key(app, code);
        return;
    }

    match code {
        KeyCode::Esc => {
            // Abandon the run
            app.run = None;
            app.screen = Screen::Menu;
        }
        KeyCode::Char(' ') | KeyCode::Char('r') => handle_roll(app),
        _ => {}
    }
}

fn handle_roll(app: &mut App) {
    let Some(run) = app.run.as_mut() else { return };

    // Guarded command: rolling while busy is a silent no-op
    let Some(result) = game_logic::roll_requested(run, &app.maze, &mut app.rng) else {
        return;
    };
    app.last_roll = Some(result.steps);
    app.status = status_for(&result.events);

    match run.phase {
        MovementPhase::Suspended(SuspendReason::Quiz) => {
            match game_logic::quiz_presented(run, &app.maze, &app.bank, &mut app.rng) {
                Some(question) => {
                    app.modal = Some(Modal::Quiz {
                        question: question.clone(),
                        outcome: None,
                    });
                }
                None => {
                    app.status = "No questions available, roll again".to_string();
                }
            }
        }
        MovementPhase::Suspended(SuspendReason::Event) => {
            app.modal = Some(Modal::Wheel { result: None });
        }
        MovementPhase::Finished => finish(app),
        _ => {}
    }
}

enum ModalAction {
    Answer(usize),
    Spin,
    Close,
    Ignore,
}

fn handle_modal_key(app: &mut App, code: KeyCode) {
    let action = match (&app.modal, code) {
        (Some(Modal::Quiz { outcome: None, .. }), KeyCode::Char(c @ '1'..='4')) => {
            ModalAction::Answer(c as usize - '1' as usize)
        }
        (Some(Modal::Quiz { outcome: Some(_), .. }), KeyCode::Enter) => ModalAction::Close,
        (Some(Modal::Wheel { result: None }), KeyCode::Char(' ') | KeyCode::Enter) => {
            ModalAction::Spin
        }
        (Some(Modal::Wheel { result: Some(_) }), KeyCode::Enter) => ModalAction::Close,
        _ => ModalAction::Ignore,
    };

    match action {
        ModalAction::Answer(answer) => {
            if let Some(run) = app.run.as_mut() {
                let outcome = game_logic::answer_selected(run, &app.maze, &app.bank, answer);
                if let Some(Modal::Quiz { outcome: slot, .. }) = app.modal.as_mut() {
                    *slot = outcome;
                }
            }
        }
        ModalAction::Spin => {
            if let Some(run) = app.run.as_mut() {
                let spun = game_logic::wheel_spun(run, &app.maze, &mut app.rng);
                if let Some(Modal::Wheel { result }) = app.modal.as_mut() {
                    *result = spun;
                }
            }
        }
        ModalAction::Close => {
            app.modal = None;
            app.status = "Press Space to roll".to_string();
            let finished = app
                .run
                .as_ref()
                .is_some_and(|run| run.phase == MovementPhase::Finished);
            if finished {
                finish(app);
            }
        }
        ModalAction::Ignore => {}
    }
}

fn finish(app: &mut App) {
    if let Some(run) = app.run.as_mut() {
        app.summary = Some(game_logic::finish_run(run, &mut app.store, now()));
        app.modal = None;
        app.screen = Screen::Result;
    }
}

/// Status line for the last roll's events.
fn status_for(events: &[MoveEvent]) -> String {
    match events.last() {
        Some(MoveEvent::QuizTile) => "Quiz tile! Answer the question".to_string(),
        Some(MoveEvent::EventTile) => "Event tile! Spin the wheel".to_string(),
        Some(MoveEvent::ReachedGoal) => "You reached the goal!".to_string(),
        Some(MoveEvent::DeadEnd) => "Dead end - roll again".to_string(),
        Some(MoveEvent::Moved { .. }) => "Press Space to roll".to_string(),
        None => String::new(),
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
