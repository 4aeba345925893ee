use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use coinfall_engine::{Command, FrameClock, InputQueue, Rect, World, WorldConfig};

// Character-grid view of the 800x600 world.
const GRID_W: u16 = 80;
const GRID_H: u16 = 30;
const HUD_ROWS: u16 = 1;

const MAX_FRAME_DT: f32 = 1.0 / 20.0; // clamp if system hiccups

struct View {
    cells: Vec<char>,
    scale_x: f32,
    scale_y: f32,
}

impl View {
    fn new(world_w: f32, world_h: f32) -> Self {
        Self {
            cells: vec![' '; (GRID_W as usize) * (GRID_H as usize)],
            scale_x: GRID_W as f32 / world_w,
            scale_y: GRID_H as f32 / world_h,
        }
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Stamp a world-space rectangle onto the grid.
    fn stamp(&mut self, rect: &Rect, glyph: char) {
        let x0 = (rect.left() * self.scale_x).floor().max(0.0) as i32;
        let x1 = ((rect.right() * self.scale_x).ceil() as i32).min(GRID_W as i32);
        let y0 = (rect.top() * self.scale_y).floor().max(0.0) as i32;
        let y1 = ((rect.bottom() * self.scale_y).ceil() as i32).min(GRID_H as i32);
        for y in y0.max(0)..y1 {
            for x in x0..x1 {
                self.cells[y as usize * GRID_W as usize + x as usize] = glyph;
            }
        }
    }

    fn row(&self, y: u16) -> String {
        let start = y as usize * GRID_W as usize;
        self.cells[start..start + GRID_W as usize].iter().collect()
    }
}

fn draw(out: &mut Stdout, view: &mut View, world: &World) -> io::Result<()> {
    view.clear();
    for platform in world.platforms() {
        view.stamp(platform, '#');
    }
    for coin in world.coins() {
        view.stamp(&coin.rect, 'o');
    }
    for enemy in world.enemies() {
        view.stamp(&enemy.rect, 'G');
    }
    view.stamp(&world.player_rect(), '@');

    let hud = if world.is_over() {
        format!(" score {:>4}   GAME OVER, press q", world.score())
    } else {
        format!(" score {:>4}   arrows move, up jumps, q quits", world.score())
    };
    queue!(
        out,
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::Yellow),
        Print(format!("{hud:<width$}", width = GRID_W as usize)),
        ResetColor,
    )?;
    for y in 0..GRID_H {
        queue!(out, cursor::MoveTo(0, y + HUD_ROWS), Print(view.row(y)))?;
    }
    out.flush()
}

/// Translate one terminal key event into simulation commands.
/// Without keyboard-enhancement support the terminal never reports releases,
/// so the down arrow doubles as an explicit stop.
fn push_commands(input: &mut InputQueue, code: KeyCode, kind: KeyEventKind) {
    match (kind, code) {
        (KeyEventKind::Press, KeyCode::Left) => input.push(Command::MoveLeft),
        (KeyEventKind::Press, KeyCode::Right) => input.push(Command::MoveRight),
        (KeyEventKind::Press, KeyCode::Up | KeyCode::Char(' ')) => input.push(Command::Jump),
        (KeyEventKind::Press, KeyCode::Down) => {
            input.push(Command::ReleaseLeft);
            input.push(Command::ReleaseRight);
        }
        (KeyEventKind::Release, KeyCode::Left) => input.push(Command::ReleaseLeft),
        (KeyEventKind::Release, KeyCode::Right) => input.push(Command::ReleaseRight),
        _ => {}
    }
}

fn run(out: &mut Stdout) -> io::Result<()> {
    let (tw, th) = terminal::size()?;
    if tw < GRID_W || th < GRID_H + HUD_ROWS {
        execute!(
            out,
            cursor::MoveTo(0, 0),
            Print(format!("Terminal too small. Need {}x{}.\n", GRID_W, GRID_H + HUD_ROWS))
        )?;
        return Ok(());
    }

    let config = WorldConfig::default();
    let mut view = View::new(config.width, config.height);
    let mut world = World::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut input = InputQueue::new();
    let mut clock = FrameClock::new(60.0);
    let mut last = Instant::now();

    loop {
        // input
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) => match k.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    code => push_commands(&mut input, code, k.kind),
                },
                _ => {}
            }
        }

        // dt
        let now = Instant::now();
        let frame_dt = (now - last).as_secs_f32().min(MAX_FRAME_DT);
        last = now;

        for _ in 0..clock.accumulate(frame_dt) {
            world.step(&mut input);
        }

        draw(out, &mut view, &world)?;

        // light frame cap
        std::thread::sleep(Duration::from_millis(2));
    }
}

fn main() -> io::Result<()> {
    let mut out = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(
        out,
        EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )?;
    let enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
    if enhanced {
        let _ = execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        );
    }

    let res = run(&mut out);

    // restore
    if enhanced {
        let _ = execute!(out, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(out, cursor::Show, LeaveAlternateScreen, ResetColor);
    let _ = terminal::disable_raw_mode();

    res
}
