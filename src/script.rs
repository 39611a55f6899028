//! Event scripts: a plain-text stream of host events for headless replay.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! resize 400 300
//! tool rectangle
//! color #e03131
//! down 10 10
//! move 110 60
//! up 110 60
//! key Ctrl+Z
//! ```

use crate::config::KeyBinding;
use crate::draw::{Color, color::name_to_color};
use crate::geometry::Point;
use crate::input::{InputState, Key, PointerButton, Tool};
use thiserror::Error;

/// A script line that could not be parsed.
#[derive(Debug, Error, PartialEq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

/// One parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tool(Tool),
    Color(Color),
    Width(f64),
    PanMode(bool),
    Resize(i32, i32),
    Down(PointerButton, Point),
    Move(Point),
    Up(PointerButton, Point),
    Leave,
    Wheel(Point, f64),
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd(Vec<Point>),
    Key(KeyBinding),
    Type(String),
    Undo,
    Redo,
    Clear,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command = parse_line(line).map_err(|message| ScriptError {
            line: index + 1,
            message,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

fn parse_line(line: &str) -> Result<Command, String> {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match name.to_lowercase().as_str() {
        "tool" => Command::Tool(single(&args)?.parse()?),
        "color" => {
            let spec = single(&args)?;
            let color = name_to_color(spec).ok_or_else(|| format!("Unknown color '{spec}'"))?;
            Command::Color(color)
        }
        "width" => Command::Width(number(single(&args)?)?),
        "pan-mode" => Command::PanMode(switch(single(&args)?)?),
        "resize" => {
            let [width, height] = exact::<2>(&args)?;
            Command::Resize(integer(width)?, integer(height)?)
        }
        "down" => {
            let (button, point) = button_and_point(&args)?;
            Command::Down(button, point)
        }
        "up" => {
            let (button, point) = button_and_point(&args)?;
            Command::Up(button, point)
        }
        "move" => {
            let [x, y] = exact::<2>(&args)?;
            Command::Move(Point::new(number(x)?, number(y)?))
        }
        "leave" => no_args(&args, Command::Leave)?,
        "wheel" => {
            let [x, y, delta] = exact::<3>(&args)?;
            Command::Wheel(Point::new(number(x)?, number(y)?), number(delta)?)
        }
        "touch-start" => Command::TouchStart(points(&args)?),
        "touch-move" => Command::TouchMove(points(&args)?),
        "touch-end" => Command::TouchEnd(points(&args)?),
        "key" => {
            let binding = KeyBinding::parse(rest)?;
            if Key::from_name(&binding.key).is_none() {
                return Err(format!("Unknown key '{}'", binding.key));
            }
            Command::Key(binding)
        }
        "type" => Command::Type(rest.to_string()),
        "undo" => no_args(&args, Command::Undo)?,
        "redo" => no_args(&args, Command::Redo)?,
        "clear" => no_args(&args, Command::Clear)?,
        "zoom-in" => no_args(&args, Command::ZoomIn)?,
        "zoom-out" => no_args(&args, Command::ZoomOut)?,
        "reset-zoom" => no_args(&args, Command::ResetZoom)?,
        other => return Err(format!("Unknown command '{other}'")),
    };
    Ok(command)
}

fn single<'a>(args: &[&'a str]) -> Result<&'a str, String> {
    let [arg] = exact::<1>(args)?;
    Ok(arg)
}

fn exact<'a, const N: usize>(args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .map_err(|_| format!("Expected {} argument(s), got {}", N, args.len()))
}

fn no_args(args: &[&str], command: Command) -> Result<Command, String> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(format!("Unexpected arguments: {}", args.join(" ")))
    }
}

fn number(arg: &str) -> Result<f64, String> {
    arg.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("Invalid number '{arg}'"))
}

fn integer(arg: &str) -> Result<i32, String> {
    arg.parse::<i32>()
        .map_err(|_| format!("Invalid integer '{arg}'"))
}

fn switch(arg: &str) -> Result<bool, String> {
    match arg.to_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => Err(format!("Expected on/off, got '{other}'")),
    }
}

/// `X Y` or `X Y BUTTON`, the button defaulting to primary.
fn button_and_point(args: &[&str]) -> Result<(PointerButton, Point), String> {
    let (coords, button) = match args {
        [x, y] => ([*x, *y], PointerButton::Primary),
        [x, y, button] => {
            let button = match button.to_lowercase().as_str() {
                "primary" | "left" => PointerButton::Primary,
                "middle" => PointerButton::Middle,
                "secondary" | "right" => PointerButton::Secondary,
                other => return Err(format!("Unknown button '{other}'")),
            };
            ([*x, *y], button)
        }
        _ => return Err(format!("Expected X Y [BUTTON], got {} argument(s)", args.len())),
    };
    Ok((button, Point::new(number(coords[0])?, number(coords[1])?)))
}

/// Flat `X1 Y1 X2 Y2 ...` coordinate list.
fn points(args: &[&str]) -> Result<Vec<Point>, String> {
    if args.len() % 2 != 0 {
        return Err("Touch coordinates must come in X Y pairs".to_string());
    }
    args.chunks(2)
        .map(|pair| Ok(Point::new(number(pair[0])?, number(pair[1])?)))
        .collect()
}

impl Command {
    /// Feeds this command into the input state as the matching host call.
    pub fn apply(&self, state: &mut InputState) {
        match self {
            Command::Tool(tool) => state.set_tool(*tool),
            Command::Color(color) => state.set_color(*color),
            Command::Width(width) => state.set_stroke_width(*width),
            Command::PanMode(enabled) => state.set_pan_mode(*enabled),
            Command::Resize(width, height) => state.resize(*width, *height),
            Command::Down(button, point) => state.on_pointer_down(*button, point.x, point.y),
            Command::Move(point) => state.on_pointer_move(point.x, point.y),
            Command::Up(button, point) => state.on_pointer_up(*button, point.x, point.y),
            Command::Leave => state.on_pointer_leave(),
            Command::Wheel(point, delta) => state.on_wheel(point.x, point.y, *delta),
            Command::TouchStart(touches) => state.on_touch_start(touches),
            Command::TouchMove(touches) => state.on_touch_move(touches),
            Command::TouchEnd(remaining) => state.on_touch_end(remaining),
            Command::Key(binding) => press_binding(state, binding),
            Command::Type(text) => state.type_text(text),
            Command::Undo => state.undo(),
            Command::Redo => state.redo(),
            Command::Clear => state.clear(),
            Command::ZoomIn => state.zoom_in(),
            Command::ZoomOut => state.zoom_out(),
            Command::ResetZoom => state.reset_zoom(),
        }
    }
}

/// Presses the binding's modifiers, taps the key, then releases the modifiers.
fn press_binding(state: &mut InputState, binding: &KeyBinding) {
    let Some(key) = Key::from_name(&binding.key) else {
        return;
    };
    let modifiers = [
        (binding.ctrl, Key::Ctrl),
        (binding.shift, Key::Shift),
        (binding.alt, Key::Alt),
    ];

    for (held, modifier) in modifiers {
        if held {
            state.on_key_press(modifier);
        }
    }
    state.on_key_press(key);
    state.on_key_release(key);
    for (held, modifier) in modifiers {
        if held {
            state.on_key_release(modifier);
        }
    }
}

/// Replays every command in order.
pub fn run(state: &mut InputState, commands: &[Command]) {
    for command in commands {
        command.apply(state);
    }
    log::debug!("Replayed {} script command(s)", commands.len());
}
