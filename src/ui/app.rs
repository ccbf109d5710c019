use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::data::{DataGenerator, DataShape};
use crate::playback::{PlaybackEngine, RunState, TickPacer, VisualState};
use crate::sort::SortKind;
use crate::trace::build_trace;
use crate::ui::components::{BarPanel, GlobalFooter, StatusBar};
use crate::ui::events::{AppEvent, InputMode};
use crate::verify;

/// Frame cadence for input polling and pacing; playback speed is governed
/// by the pacer, not by this interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,
    /// Current input mode
    input_mode: InputMode,
    /// Dataset source
    generator: DataGenerator,
    /// Algorithm used for the next sort
    algorithm: SortKind,
    /// Shape used when regenerating the dataset
    shape: DataShape,
    /// Dataset range and size settings
    size: usize,
    min_value: i32,
    max_value: i32,
    /// The reference array playback starts from
    dataset: Vec<i32>,
    /// Playback scheduler
    engine: PlaybackEngine,
    /// Wall-clock to tick-count conversion
    pacer: TickPacer,
    /// Sorted result promised by the trace builder, checked at finish
    expected: Option<Vec<i32>>,
    /// Verdict or error line for the status bar
    message: Option<String>,
    /// In-flight background build, if any
    pending_build: Option<u64>,
    build_seq: u64,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Previous frame timestamp for the pacer
    last_frame: Instant,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut generator = match config.seed {
            Some(seed) => DataGenerator::with_seed(seed),
            None => DataGenerator::new(),
        };
        let dataset = generator.generate(
            config.shape,
            config.size,
            config.min_value,
            config.max_value,
        )?;

        Ok(Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            generator,
            algorithm: config.algorithm,
            shape: config.shape,
            size: config.size,
            min_value: config.min_value,
            max_value: config.max_value,
            dataset,
            engine: PlaybackEngine::new(),
            pacer: TickPacer::new(config.ticks_per_second),
            expected: None,
            message: None,
            pending_build: None,
            build_seq: 0,
            event_tx,
            event_rx,
            last_frame: Instant::now(),
        })
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        self.last_frame = Instant::now();

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                // Terminal input + playback pacing
                _ = tokio::time::sleep(FRAME_INTERVAL) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            self.handle_key_event(key);
                        }
                    }
                    self.advance_playback();
                }

                // App events from channel
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: event::KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::SelectingAlgorithm => match key.code {
                KeyCode::Char('1') => self.select_algorithm(SortKind::Bubble),
                KeyCode::Char('2') => self.select_algorithm(SortKind::Shaker),
                KeyCode::Char('3') => self.select_algorithm(SortKind::Quick),
                KeyCode::Esc => self.input_mode = InputMode::Normal,
                _ => {}
            },
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('s') | KeyCode::Enter => self.start_sort(),
                KeyCode::Char(' ') => self.toggle_pause(),
                KeyCode::Char('r') => self.regenerate(),
                KeyCode::Char('d') => {
                    self.shape = self.shape.next();
                    self.regenerate();
                }
                KeyCode::Char('a') => self.input_mode = InputMode::SelectingAlgorithm,
                KeyCode::Char('+') | KeyCode::Char('=') => self.pacer.speed_up(),
                KeyCode::Char('-') | KeyCode::Char('_') => self.pacer.slow_down(),
                KeyCode::Esc => self.abort_playback(),
                _ => {}
            },
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TraceReady {
                request,
                outcome,
                build_time,
            } => {
                // A regenerate may have invalidated this build.
                if self.pending_build != Some(request) {
                    tracing::debug!(request, "dropping stale trace build");
                    return;
                }
                self.pending_build = None;

                tracing::info!(
                    algorithm = outcome.trace.algorithm().display_name(),
                    events = outcome.trace.len(),
                    ?build_time,
                    "trace ready"
                );

                self.expected = Some(outcome.sorted);
                if let Err(e) = self.engine.start(outcome.trace, &self.dataset) {
                    self.message = Some(format!("error: {e}"));
                }
            }
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Error(msg) => {
                tracing::error!(error = %msg, "app event error");
                self.message = Some(format!("error: {msg}"));
            }
        }
    }

    /// Apply however many engine ticks the elapsed wall-clock time is
    /// worth. The engine itself never sees the clock.
    fn advance_playback(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;

        if !self.engine.is_running() {
            return;
        }

        let due = self.pacer.advance(elapsed);
        for _ in 0..due {
            match self.engine.tick() {
                Ok(snapshot) => {
                    if snapshot.is_finished() {
                        self.finish_run(&snapshot);
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "tick rejected");
                    break;
                }
            }
        }
    }

    fn finish_run(&mut self, last: &VisualState) {
        let check = verify::validate(&self.dataset, &last.values);
        let diverged = self
            .expected
            .as_ref()
            .is_some_and(|expected| expected != &last.values);

        self.message = Some(if diverged {
            "error: playback diverged from builder result".to_string()
        } else if check.passed() {
            format!("verified PASS  cmp {}  swp {}", last.comparisons, last.swaps)
        } else {
            "verified FAIL".to_string()
        });

        tracing::info!(
            comparisons = last.comparisons,
            swaps = last.swaps,
            passed = check.passed(),
            diverged,
            "sort run finished"
        );
    }

    fn select_algorithm(&mut self, kind: SortKind) {
        self.algorithm = kind;
        self.input_mode = InputMode::Normal;
        self.abort_playback();
    }

    fn start_sort(&mut self) {
        if self.pending_build.is_some() {
            return;
        }

        self.engine.reset();
        self.pacer.clear();
        self.message = None;
        self.expected = None;

        self.build_seq += 1;
        let request = self.build_seq;
        self.pending_build = Some(request);

        let algorithm = self.algorithm;
        let dataset = self.dataset.clone();
        let event_tx = self.event_tx.clone();

        // Trace building is CPU-bound; keep it off the UI thread so large
        // arrays cannot freeze input handling.
        tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            let outcome = build_trace(algorithm, &dataset);
            let _ = event_tx.send(AppEvent::TraceReady {
                request,
                outcome,
                build_time: started.elapsed(),
            });
        });
    }

    fn toggle_pause(&mut self) {
        let result = match self.engine.state() {
            RunState::Running => self.engine.pause(),
            RunState::Paused => self.engine.resume(),
            _ => return,
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "pause toggle rejected");
        }
    }

    fn regenerate(&mut self) {
        self.abort_playback();
        match self
            .generator
            .generate(self.shape, self.size, self.min_value, self.max_value)
        {
            Ok(dataset) => self.dataset = dataset,
            Err(e) => {
                let _ = self.event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    }

    /// Cancel playback and any in-flight build; safe at any cursor position.
    fn abort_playback(&mut self) {
        self.engine.reset();
        self.pacer.clear();
        self.pending_build = None;
        self.expected = None;
        self.message = None;
    }

    fn draw(&mut self, f: &mut Frame) {
        let size = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Bar panel
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Footer
            ])
            .split(size);

        let snapshot = self.engine.snapshot();

        let block = Block::default()
            .title(" sortscope ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        let panel = if snapshot.run_state == RunState::Idle {
            BarPanel::new(&self.dataset)
        } else {
            BarPanel::new(&snapshot.values)
                .highlight(snapshot.highlight)
                .pivot(snapshot.pivot)
                .finished(snapshot.is_finished())
        };
        panel.render(inner, f.buffer_mut());

        let status = StatusBar::new(self.algorithm, self.shape, self.dataset.len(), self.pacer.rate())
            .snapshot(&snapshot)
            .message(self.message.as_deref());
        status.render(chunks[1], f.buffer_mut());

        let footer = GlobalFooter::from_state(self.input_mode);
        footer.render(chunks[2], f.buffer_mut());

        if self.input_mode == InputMode::SelectingAlgorithm {
            self.draw_algorithm_selector(f, size);
        }
    }

    fn draw_algorithm_selector(&self, f: &mut Frame, area: Rect) {
        let width = 36;
        let height = 9;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;

        let dialog_area = Rect::new(x, y, width.min(area.width), height.min(area.height));

        // Clear background
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Select Algorithm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let lines: Vec<String> = SortKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let marker = if *kind == self.algorithm { "▶" } else { " " };
                format!("  {marker}[{}] {}", i + 1, kind.display_name())
            })
            .collect();

        let text = format!("\n{}\n\n  [Esc] Cancel", lines.join("\n"));
        let paragraph = Paragraph::new(text).style(Style::default().fg(Color::White));

        f.render_widget(paragraph, inner);
    }
}
