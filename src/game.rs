use std::io::{self, BufRead, Write};
use std::{fmt, thread::sleep};

use anyhow::{anyhow, Result};
use log::{debug, info};
use rand::Rng;

use crate::config::{Tuning, MENU_PROMPT};
use crate::difficulty::Delay;
use crate::food::Food;
use crate::grid::Grid;
use crate::input::{read_direction, Control};
use crate::render::{render, render_crash};
use crate::rules::{is_food_eaten, is_game_over};
use crate::snake::{Direction, Snake};
use crate::term::{TermManager, Terminal};
use crate::Coord;

/// What one frame's move led to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Moved,
    Ate,
    Crashed,
    /// Food was eaten and there is no free cell left for the next one
    Won,
}

/// How a game ended
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Over { score: u32, won: bool },
    /// The player pressed Ctrl+C
    Quit { score: u32 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Over { score, won: true } => write!(f, "You won! Your score is {}", score),
            Outcome::Over { score, won: false } | Outcome::Quit { score } => write!(f, "Your score is {}", score),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

enum State {
    Menu,
    Playing,
    GameOver(Outcome),
}

/// Everything that lives for one game. Only the game loop mutates it.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    snake: Snake,
    food: Food,
    direction: Direction,
    score: u32,
    delay: Delay,
    food_margin: Coord,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(grid: Grid, tuning: &Tuning, rng: &mut R) -> Result<Self> {
        let snake = Snake::spawn_head(&grid, rng);
        let food = Food::spawn(&grid, tuning.food_margin, &snake, rng)
            .ok_or_else(|| anyhow!("no room for food on a {}x{} board", grid.height(), grid.width()))?;

        Ok(Session::with_state(grid, tuning, snake, food, Direction::Up))
    }

    pub fn with_state(grid: Grid, tuning: &Tuning, snake: Snake, food: Food, direction: Direction) -> Self {
        Session {
            grid,
            snake,
            food,
            direction,
            score: 0,
            delay: Delay::new(tuning),
            food_margin: tuning.food_margin,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn delay(&self) -> &Delay {
        &self.delay
    }

    /// Eating is judged on the head before it moves; the collision check
    /// only runs on frames without food.
    pub fn step<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> Step {
        self.direction = direction;

        let ate = is_food_eaten(&self.snake, &self.food);
        self.snake.advance(self.direction, ate);

        if ate {
            self.score += 1;
            self.delay.speed_up();

            match Food::spawn(&self.grid, self.food_margin, &self.snake, rng) {
                Some(food) => {
                    debug!("Food moved to {:?}, score {}, delay {:?}", food.position(), self.score, self.delay.current());
                    self.food = food;
                    Step::Ate
                }
                None => Step::Won,
            }
        } else if is_game_over(&self.snake, &self.grid) {
            Step::Crashed
        } else {
            Step::Moved
        }
    }
}

pub struct SnakeGame {
    grid: Grid,
    tuning: Tuning,
}

impl SnakeGame {
    pub fn new(tuning: Tuning) -> Self {
        SnakeGame { grid: Grid::default(), tuning }
    }

    /// Menu, game, score, and back to the menu until the player quits.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut state = State::Menu;

        loop {
            state = match state {
                State::Menu => match prompt(&mut stdin.lock(), &mut stdout)? {
                    MenuChoice::Start => State::Playing,
                    MenuChoice::Quit => return Ok(()),
                },
                State::Playing => State::GameOver(self.play(rng)?),
                State::GameOver(outcome) => {
                    writeln!(stdout, "{}", outcome)?;
                    if let Outcome::Quit { .. } = outcome {
                        return Ok(());
                    }
                    State::Menu
                }
            };
        }
    }

    /// One game on the real terminal, which is put back to normal even if
    /// the game fails.
    pub fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outcome> {
        let mut term = TermManager::new();
        term.setup()?;

        let res = Session::new(self.grid, &self.tuning, rng).and_then(|session| self.drive(session, &mut term, rng));

        term.restore()?;
        res
    }

    pub fn drive<T, R>(&self, mut session: Session, term: &mut T, rng: &mut R) -> Result<Outcome>
    where
        T: Terminal + ?Sized,
        R: Rng + ?Sized,
    {
        info!("Game started, head at {:?}", session.snake().head());

        loop {
            render(term, &self.grid, session.snake(), session.food(), session.score())?;

            let direction = match read_direction(term, session.direction())? {
                Control::Steer(dir) => dir,
                Control::Quit => {
                    info!("Game abandoned with score {}", session.score());
                    return Ok(Outcome::Quit { score: session.score() });
                }
            };

            match session.step(direction, rng) {
                Step::Moved | Step::Ate => {}
                Step::Crashed => {
                    info!("Crashed at {:?}, score {}, length {}",
                          session.snake().head(), session.score(), session.snake().len());
                    render_crash(term, session.snake())?;
                    sleep(self.tuning.game_over_pause);
                    return Ok(Outcome::Over { score: session.score(), won: false });
                }
                Step::Won => {
                    info!("Board filled, score {}", session.score());
                    render(term, &self.grid, session.snake(), session.food(), session.score())?;
                    sleep(self.tuning.game_over_pause);
                    return Ok(Outcome::Over { score: session.score(), won: true });
                }
            }

            sleep(session.delay().frame_sleep(session.direction()));
        }
    }
}

/// Shows the start prompt and reads one line. Any q quits, so does a closed stdin.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<MenuChoice> {
    write!(output, "{}", MENU_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(MenuChoice::Quit);
    }

    if line.chars().any(|c| c == 'q' || c == 'Q') {
        Ok(MenuChoice::Quit)
    } else {
        Ok(MenuChoice::Start)
    }
}
