use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::output::{self, DEFAULT_OUTPUT_FILE};
use std::num::IntErrorKind;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, warn};
use uuidgen_core::{Batch, BatchSize, Namespace, Variant};
use uuidgen_generator::{generate, GenerationRequest, HashAlgorithm};

/// Name used for hash-based identifiers when the user leaves it blank.
pub const DEFAULT_NAME: &str = "default";

const EXIT_CHOICE: &str = "5";

/// Why an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user picked the exit option.
    Requested,
    /// The interrupt token fired during a read.
    Interrupted,
    /// The console reached end of input.
    EndOfInput,
}

enum State {
    Menu { show_options: bool },
    CountInput { variant: Variant },
    NamespaceInput { hash: HashAlgorithm, size: BatchSize },
    NameInput {
        hash: HashAlgorithm,
        size: BatchSize,
        namespace: Namespace,
    },
    Generate {
        request: GenerationRequest,
        size: BatchSize,
    },
    Display { batch: Batch },
    SavePrompt { batch: Batch },
    Exit(ExitReason),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Menu { .. } => "menu",
            State::CountInput { .. } => "count",
            State::NamespaceInput { .. } => "namespace",
            State::NameInput { .. } => "name",
            State::Generate { .. } => "generate",
            State::Display { .. } => "display",
            State::SavePrompt { .. } => "save",
            State::Exit(_) => "exit",
        }
    }
}

enum Input {
    Line(String),
    Closed(ExitReason),
}

/// A guided console session.
///
/// Runs `MENU -> COUNT -> [NAMESPACE -> NAME] -> GENERATE -> DISPLAY -> SAVE`
/// and back to the menu until the user exits, the input ends, or the
/// interrupt token fires.
pub struct Session<R, W> {
    lines: Lines<R>,
    out: W,
    interrupt: Interrupt,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, out: W, interrupt: Interrupt) -> Self {
        Self {
            lines: reader.lines(),
            out,
            interrupt,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Runs the session to completion. Only console write or read failures
    /// are returned as errors.
    pub async fn run(&mut self) -> Result<ExitReason> {
        self.write("\n=== UUID Generator ===\n").await?;

        let mut state = State::Menu { show_options: true };
        loop {
            debug!(state = state.name(), "interactive step");
            state = match state {
                State::Exit(reason) => {
                    self.farewell(reason).await?;
                    return Ok(reason);
                }
                state => self.step(state).await?,
            };
        }
    }

    async fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::Menu { show_options } => self.menu(show_options).await?,
            State::CountInput { variant } => self.count_input(variant).await?,
            State::NamespaceInput { hash, size } => self.namespace_input(hash, size).await?,
            State::NameInput {
                hash,
                size,
                namespace,
            } => self.name_input(hash, size, namespace).await?,
            State::Generate { request, size } => match generate(&request, size) {
                Ok(batch) => State::Display { batch },
                Err(err) => {
                    warn!(error = %err, "generation failed");
                    self.write(&format!("An error occurred: {err}\n")).await?;
                    State::Menu { show_options: true }
                }
            },
            State::Display { batch } => {
                self.write(&output::render_labeled(&batch)).await?;
                State::SavePrompt { batch }
            }
            State::SavePrompt { batch } => self.save_prompt(batch).await?,
            State::Exit(reason) => State::Exit(reason),
        };
        Ok(next)
    }

    async fn menu(&mut self, show_options: bool) -> Result<State> {
        if show_options {
            let mut text = String::from("Available UUID types:\n");
            for (number, variant) in Variant::ALL.iter().enumerate() {
                text.push_str(&format!("{}. {}\n", number + 1, variant.description()));
            }
            text.push_str(&format!("{EXIT_CHOICE}. Exit\n"));
            self.write(&text).await?;
        }

        let choice = match self.prompt("\nSelect UUID type (1-5): ").await? {
            Input::Line(line) => line,
            Input::Closed(reason) => return Ok(State::Exit(reason)),
        };

        if choice == EXIT_CHOICE {
            return Ok(State::Exit(ExitReason::Requested));
        }

        match menu_pick(&choice, &Variant::ALL) {
            Some(variant) => Ok(State::CountInput { variant }),
            None => {
                self.write("Invalid choice. Please select 1-5.\n").await?;
                Ok(State::Menu {
                    show_options: false,
                })
            }
        }
    }

    async fn count_input(&mut self, variant: Variant) -> Result<State> {
        let line = match self
            .prompt("How many UUIDs to generate? (default: 1): ")
            .await?
        {
            Input::Line(line) => line,
            Input::Closed(reason) => return Ok(State::Exit(reason)),
        };

        let count = if line.is_empty() {
            1
        } else {
            match line.parse::<i64>() {
                Ok(count) => count,
                // Too many digits is still a number; let the range check reject it.
                Err(err) if *err.kind() == IntErrorKind::PosOverflow => i64::MAX,
                Err(err) if *err.kind() == IntErrorKind::NegOverflow => i64::MIN,
                Err(_) => {
                    self.write("Invalid number. Using default count of 1.\n")
                        .await?;
                    1
                }
            }
        };

        let size = match BatchSize::new(count) {
            Ok(size) => size,
            Err(err) => {
                self.write(&format!("Invalid count: {err}.\n")).await?;
                return Ok(State::CountInput { variant });
            }
        };

        Ok(match variant {
            Variant::NameBasedMd5 => State::NamespaceInput {
                hash: HashAlgorithm::Md5,
                size,
            },
            Variant::NameBasedSha1 => State::NamespaceInput {
                hash: HashAlgorithm::Sha1,
                size,
            },
            other => State::Generate {
                request: GenerationRequest::new(other, Namespace::default(), ""),
                size,
            },
        })
    }

    async fn namespace_input(&mut self, hash: HashAlgorithm, size: BatchSize) -> Result<State> {
        let mut text = String::from("\nAvailable namespaces:\n");
        for (number, namespace) in Namespace::ALL.iter().enumerate() {
            text.push_str(&format!("{}. {} namespace\n", number + 1, namespace));
        }
        self.write(&text).await?;

        let choice = match self.prompt("Select namespace (1-4): ").await? {
            Input::Line(line) => line,
            Input::Closed(reason) => return Ok(State::Exit(reason)),
        };

        let namespace = match menu_pick(&choice, &Namespace::ALL) {
            Some(namespace) => namespace,
            None => {
                self.write("Invalid namespace choice. Using DNS namespace.\n")
                    .await?;
                Namespace::Dns
            }
        };

        Ok(State::NameInput {
            hash,
            size,
            namespace,
        })
    }

    async fn name_input(
        &mut self,
        hash: HashAlgorithm,
        size: BatchSize,
        namespace: Namespace,
    ) -> Result<State> {
        let name = match self.prompt("Enter name for UUID generation: ").await? {
            Input::Line(line) if line.is_empty() => DEFAULT_NAME.to_string(),
            Input::Line(line) => line,
            Input::Closed(reason) => return Ok(State::Exit(reason)),
        };

        Ok(State::Generate {
            request: GenerationRequest::name_based(hash, namespace, name),
            size,
        })
    }

    async fn save_prompt(&mut self, batch: Batch) -> Result<State> {
        let answer = match self.prompt("\nSave to file? (y/N): ").await? {
            Input::Line(line) => line.to_lowercase(),
            Input::Closed(reason) => return Ok(State::Exit(reason)),
        };

        if answer == "y" || answer == "yes" {
            let filename = match self
                .prompt(&format!("Enter filename (default: {DEFAULT_OUTPUT_FILE}): "))
                .await?
            {
                Input::Line(line) if line.is_empty() => DEFAULT_OUTPUT_FILE.to_string(),
                Input::Line(line) => line,
                Input::Closed(reason) => return Ok(State::Exit(reason)),
            };

            let path = PathBuf::from(&filename);
            match output::save(&batch, &path) {
                Ok(()) => self.write(&format!("UUIDs saved to {filename}\n")).await?,
                Err(err) => {
                    warn!(error = %err, "failed to save batch");
                    self.write(&format!("Error saving file: {err}\n")).await?;
                }
            }
        }

        Ok(State::Menu { show_options: true })
    }

    async fn farewell(&mut self, reason: ExitReason) -> Result<()> {
        match reason {
            ExitReason::Interrupted => self.write("\n\nExiting...\n").await,
            ExitReason::Requested | ExitReason::EndOfInput => self.write("Goodbye!\n").await,
        }
    }

    /// Prints `text` and waits for one trimmed line, the end of input, or the
    /// interrupt, whichever comes first.
    async fn prompt(&mut self, text: &str) -> Result<Input> {
        self.write(text).await?;

        tokio::select! {
            biased;
            _ = self.interrupt.triggered() => Ok(Input::Closed(ExitReason::Interrupted)),
            line = self.lines.next_line() => Ok(match line? {
                Some(line) => Input::Line(line.trim().to_string()),
                None => Input::Closed(ExitReason::EndOfInput),
            }),
        }
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

/// Maps a 1-based menu answer onto `options`.
fn menu_pick<T: Copy>(choice: &str, options: &[T]) -> Option<T> {
    let number: usize = choice.parse().ok()?;
    options.get(number.checked_sub(1)?).copied()
}
