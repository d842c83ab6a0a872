use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::event_loop::{Flow, UiEvent, dispatch};

pub struct App;

impl App {
    /// Drives the floating cart from stdin until `quit` or end of input.
    pub async fn run(container: DependencyContainer) -> anyhow::Result<()> {
        Self::run_with(
            &container,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
        .await
    }

    /// Reads one command per line from `input` and writes the rendered cart to
    /// `output` at start, once the saved cart is loaded, and after every
    /// handled line.
    pub async fn run_with<R, W>(
        container: &DependencyContainer,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut hydration = container.cart.spawn_load();
        let mut hydrating = true;

        write_line(&mut output, &container.floating_cart.render().to_string()).await?;

        // Partial reads stay in `line` when the hydration branch wins.
        let mut line = Vec::new();
        loop {
            tokio::select! {
                _ = &mut hydration, if hydrating => {
                    hydrating = false;
                    write_line(&mut output, &container.floating_cart.render().to_string()).await?;
                }
                read = input.read_until(b'\n', &mut line) => {
                    if read? == 0 {
                        break;
                    }
                    let flow = handle_line(container, &line, &mut output).await?;
                    line.clear();
                    if flow == Flow::Quit {
                        break;
                    }
                }
            }
        }

        if hydrating {
            hydration.abort();
        }
        output.flush().await?;
        Ok(())
    }
}

async fn handle_line<W>(
    container: &DependencyContainer,
    raw: &[u8],
    output: &mut W,
) -> anyhow::Result<Flow>
where
    W: AsyncWrite + Unpin,
{
    if raw.trim_ascii().is_empty() {
        return Ok(Flow::Continue);
    }

    let event = match UiEvent::from_line(raw) {
        Ok(event) => event,
        Err(err) => {
            container.logger.warn(&format!(
                "Ignoring input {:?}: {}",
                String::from_utf8_lossy(raw).trim_end(),
                err
            ));
            write_line(output, &format!("error: {}", err)).await?;
            return Ok(Flow::Continue);
        }
    };

    match dispatch(event, container).await {
        Ok(Flow::Quit) => Ok(Flow::Quit),
        Ok(Flow::Continue) => {
            write_line(output, &container.floating_cart.render().to_string()).await?;
            Ok(Flow::Continue)
        }
        Err(err) => {
            container
                .logger
                .error(&format!("Cart operation failed: {}", err));
            write_line(output, &format!("error: {}", err)).await?;
            Ok(Flow::Continue)
        }
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::app_config::AppConfig;
    use crate::config::cart_config::CartConfig;
    use crate::config::storage_config::StorageConfig;
    use persistence::key_value::memory::InMemoryKeyValueStorage;

    fn container() -> DependencyContainer {
        let config = AppConfig {
            storage: StorageConfig::from_vars(|_| None),
            cart: CartConfig::from_vars(|_| None),
        };
        DependencyContainer::new(&config, Arc::new(InMemoryKeyValueStorage::new()))
    }

    async fn run(container: &DependencyContainer, input: &[u8]) -> Vec<String> {
        let mut output = Vec::new();
        App::run_with(container, input, &mut output).await.unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn should_render_last_mutation_before_quitting() {
        let container = container();

        let lines = run(&container, b"add p1 50 u Shirt\nquit\n").await;

        assert_eq!(lines.first().unwrap(), "[cart] 0 itens | R$ 0,00");
        assert_eq!(lines.last().unwrap(), "[cart] 1 itens | R$ 50,00");
    }

    #[tokio::test]
    async fn should_render_last_mutation_at_end_of_input() {
        let container = container();

        let lines = run(&container, b"add p1 50 u Shirt\ninc p1").await;

        assert_eq!(lines.last().unwrap(), "[cart] 2 itens | R$ 100,00");
    }

    #[tokio::test]
    async fn should_skip_lines_that_are_not_utf8() {
        let container = container();

        let lines = run(
            &container,
            b"add p0 10 u Cap\n\xff\xfe\nadd p1 50 u Shirt\ntap\n",
        )
        .await;

        assert!(lines.contains(&"error: input.invalid_encoding".to_string()));
        assert_eq!(lines.last().unwrap(), "[cart] 2 itens | R$ 60,00");
        assert_eq!(container.cart.state.products().len(), 2);
    }

    #[tokio::test]
    async fn should_keep_running_after_cart_errors() {
        let container = container();

        let lines = run(&container, b"add p1 -5 u Shirt\nadd p1 5 u Shirt\n").await;

        assert!(lines.contains(&"error: cart.negative_price".to_string()));
        assert_eq!(lines.last().unwrap(), "[cart] 1 itens | R$ 5,00");
    }
}
