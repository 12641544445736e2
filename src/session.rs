//! Interactive storefront session: one text command per line, each reduced
//! into the view state and followed by a re-render.

use crate::{
    errors::{ServiceError, ServiceResult},
    models::{ProductId, Section, StoreContent},
    render::{render, RenderSettings},
    services::{reduce, Action, Catalog, ViewState},
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

pub const HELP: &str = "\
Команды:
  go <home|catalog|cart|about|reviews|contacts>
  search [текст]        пустой запрос сбрасывает поиск
  category <id>         all, furniture, decor, lighting, textile
  add <id>              добавить товар в корзину
  remove <id>           удалить строку корзины
  qty <id> <n>          задать количество (0 удаляет)
  inc <id> / dec <id>   кнопки + и -
  show                  показать текущую страницу
  state                 состояние в JSON
  help                  эта справка
  quit                  выход";

/// A parsed session command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    Show,
    State,
    Help,
    Quit,
}

fn parse_id(arg: Option<&str>, what: &str) -> ServiceResult<ProductId> {
    let raw = arg.ok_or_else(|| ServiceError::InvalidInput(format!("missing {}", what)))?;
    raw.parse()
        .map_err(|_| ServiceError::InvalidInput(format!("{} must be a positive integer: {}", what, raw)))
}

fn no_more_args<'a>(mut args: impl Iterator<Item = &'a str>) -> ServiceResult<()> {
    match args.next() {
        Some(extra) => Err(ServiceError::InvalidInput(format!(
            "unexpected argument: {}",
            extra
        ))),
        None => Ok(()),
    }
}

impl FromStr for Command {
    type Err = ServiceError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let command = match keyword.to_lowercase().as_str() {
            "go" => {
                let name = args
                    .next()
                    .ok_or_else(|| ServiceError::InvalidInput("missing section".into()))?;
                let section = Section::from_str(name)
                    .map_err(|_| ServiceError::InvalidInput(format!("unknown section: {}", name)))?;
                no_more_args(args)?;
                Command::Apply(Action::Navigate { section })
            }
            "search" => Command::Apply(Action::Search {
                query: rest.to_string(),
            }),
            "category" => {
                let category = args
                    .next()
                    .ok_or_else(|| ServiceError::InvalidInput("missing category id".into()))?;
                no_more_args(args)?;
                Command::Apply(Action::SelectCategory {
                    category: category.to_string(),
                })
            }
            "add" | "remove" | "inc" | "dec" => {
                let product_id = parse_id(args.next(), "product id")?;
                no_more_args(args)?;
                Command::Apply(match keyword.to_lowercase().as_str() {
                    "add" => Action::AddToCart { product_id },
                    "remove" => Action::RemoveFromCart { product_id },
                    "inc" => Action::Increment { product_id },
                    _ => Action::Decrement { product_id },
                })
            }
            "qty" => {
                let product_id = parse_id(args.next(), "product id")?;
                let raw = args
                    .next()
                    .ok_or_else(|| ServiceError::InvalidInput("missing quantity".into()))?;
                let quantity = raw.parse::<i64>().map_err(|_| {
                    ServiceError::InvalidInput(format!("quantity must be an integer: {}", raw))
                })?;
                no_more_args(args)?;
                Command::Apply(Action::UpdateQuantity {
                    product_id,
                    quantity,
                })
            }
            "show" => Command::Show,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err(ServiceError::InvalidInput("empty command".into())),
            other => return Err(ServiceError::InvalidInput(format!("unknown command: {}", other))),
        };
        Ok(command)
    }
}

/// Whether the session loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// One shopper's session over a catalog.
pub struct Session<'a> {
    id: Uuid,
    state: ViewState,
    catalog: &'a Catalog,
    content: &'a StoreContent,
    settings: RenderSettings,
    json: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        state: ViewState,
        catalog: &'a Catalog,
        content: &'a StoreContent,
        settings: RenderSettings,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            state,
            catalog,
            content,
            settings,
            json: false,
        }
    }

    /// Print a JSON state summary instead of the rendered page after each action.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Rejects actions naming ids the catalog does not know, so the user
    /// hears about typos. The reducer itself would ignore them.
    fn check(&self, action: &Action) -> ServiceResult<()> {
        match action {
            Action::AddToCart { product_id } if self.catalog.product(*product_id).is_none() => {
                Err(ServiceError::NotFound(format!("Product {} not found", product_id)))
            }
            Action::SelectCategory { category } if !self.catalog.has_category(category) => Err(
                ServiceError::NotFound(format!("Category {} not found", category)),
            ),
            _ => Ok(()),
        }
    }

    /// Applies an action to the session state.
    pub fn dispatch(&mut self, action: &Action) -> ServiceResult<()> {
        self.check(action)?;
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action, self.catalog);
        Ok(())
    }

    fn write_view(&self, out: &mut impl Write) -> ServiceResult<()> {
        if self.json {
            self.write_state(out)
        } else {
            let page = render(&self.state, self.catalog, self.content, &self.settings);
            out.write_all(page.as_bytes())?;
            Ok(())
        }
    }

    fn write_state(&self, out: &mut impl Write) -> ServiceResult<()> {
        let summary = self.state.summary(self.catalog);
        let json = if self.json {
            serde_json::to_string(&summary)?
        } else {
            serde_json::to_string_pretty(&summary)?
        };
        writeln!(out, "{}", json)?;
        Ok(())
    }

    /// Executes one command, writing any output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> ServiceResult<Flow> {
        match command {
            Command::Apply(action) => {
                self.dispatch(&action)?;
                self.write_view(out)?;
            }
            Command::Show => self.write_view(out)?,
            Command::State => self.write_state(out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// Blank lines and lines starting with `#` are skipped. Bad commands are
    /// reported on `out` and the loop carries on.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> ServiceResult<()> {
        let span = info_span!("session", id = %self.id);
        let _guard = span.enter();
        info!(section = %self.state.active_section(), "session started");

        self.write_view(out)?;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(_) => {
                    let err = ServiceError::InvalidInput("line is not valid UTF-8".into());
                    warn!(error = %err, "command rejected");
                    writeln!(out, "Ошибка: {}", err)?;
                    continue;
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            debug!(command = trimmed, "received command");

            let result = trimmed
                .parse::<Command>()
                .and_then(|command| self.execute(command, out));
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "command rejected");
                    writeln!(out, "Ошибка: {}", err)?;
                }
                Err(err) => return Err(err),
            }
            out.flush()?;
        }

        info!(
            items = self.state.cart_item_count(),
            total = self.state.cart_total(),
            "session finished"
        );
        Ok(())
    }
}
