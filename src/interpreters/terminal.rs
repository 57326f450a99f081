//! Asynchronous interpreter bound to a line-oriented terminal on tokio.

use super::parse_base10;
use crate::effects::{Console, Numbers, Random, Sequence};
use crate::error::GameError;
use futures::future::BoxFuture;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};
use tokio::sync::Mutex;
use tracing::{debug, trace};

/// Production interpreter: computations are boxed futures driven by the
/// tokio runtime, console operations go through async byte streams, and
/// randomness comes from a [`StdRng`].
///
/// The reader and writer are generic so tests can run a whole session
/// against in-memory buffers; [`Terminal::stdio`] binds the real process
/// streams.
pub struct Terminal<R, W> {
    input: Arc<Mutex<Lines<R>>>,
    output: Arc<Mutex<W>>,
    rng: Arc<Mutex<StdRng>>,
}

// Hand-rolled so cloning never requires `R: Clone` / `W: Clone`.
impl<R, W> Clone for Terminal<R, W> {
    fn clone(&self) -> Self {
        Self {
            input: Arc::clone(&self.input),
            output: Arc::clone(&self.output),
            rng: Arc::clone(&self.rng),
        }
    }
}

impl Terminal<BufReader<Stdin>, Stdout> {
    /// Binds the interpreter to the process stdin/stdout with an
    /// entropy-seeded RNG.
    pub fn stdio() -> Self {
        Self::with_rng(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            StdRng::from_entropy(),
        )
    }
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    /// Builds an interpreter over arbitrary streams with a caller-supplied
    /// RNG, which makes async sessions reproducible under test.
    pub fn with_rng(reader: R, writer: W, rng: StdRng) -> Self {
        Self {
            input: Arc::new(Mutex::new(reader.lines())),
            output: Arc::new(Mutex::new(writer)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Shared handle to the writer, for observing output in tests.
    pub fn output(&self) -> Arc<Mutex<W>> {
        Arc::clone(&self.output)
    }
}

impl<R, W> Sequence for Terminal<R, W>
where
    R: AsyncBufRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    type Comp<A>
        = BoxFuture<'static, Result<A, GameError>>
    where
        A: Send + 'static;

    fn pure<A>(&self, value: A) -> Self::Comp<A>
    where
        A: Send + 'static,
    {
        Box::pin(async move { Ok(value) })
    }

    fn chain<A, B, F>(&self, fa: Self::Comp<A>, f: F) -> Self::Comp<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Comp<B> + Send + 'static,
    {
        Box::pin(async move {
            let a = fa.await?;
            f(a).await
        })
    }

    fn tail_rec<A, B, F>(&self, init: A, mut step: F) -> Self::Comp<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(A) -> Self::Comp<ControlFlow<B, A>> + Send + 'static,
    {
        Box::pin(async move {
            let mut acc = init;
            loop {
                match step(acc).await? {
                    ControlFlow::Continue(next) => acc = next,
                    ControlFlow::Break(done) => return Ok(done),
                }
            }
        })
    }
}

impl<R, W> Console for Terminal<R, W>
where
    R: AsyncBufRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    fn write_line(&self, line: &str) -> Self::Comp<()> {
        let text = line.to_owned();
        let output = self.output();
        Box::pin(async move {
            trace!(line = %text, "terminal write");
            let mut out = output.lock().await;
            out.write_all(text.as_bytes()).await?;
            out.write_all(b"\n").await?;
            out.flush().await?;
            Ok(())
        })
    }

    /// Suspends until one full line arrives, racing the read against an
    /// interrupt signal. `Lines::next_line` is cancel-safe, so an interrupt
    /// cannot leave a line half-read.
    fn read_line(&self) -> Self::Comp<String> {
        let input = Arc::clone(&self.input);
        Box::pin(async move {
            let mut lines = input.lock().await;
            tokio::select! {
                signal = tokio::signal::ctrl_c() => {
                    signal?;
                    debug!("pending read cancelled by interrupt");
                    Err(GameError::Interrupted)
                }
                line = lines.next_line() => match line? {
                    Some(line) => Ok(line),
                    None => Err(GameError::InputClosed),
                },
            }
        })
    }
}

impl<R, W> Numbers for Terminal<R, W>
where
    R: AsyncBufRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    fn parse_int(&self, text: &str) -> Self::Comp<i64> {
        let text = text.to_owned();
        Box::pin(async move { parse_base10(&text) })
    }
}

impl<R, W> Random for Terminal<R, W>
where
    R: AsyncBufRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    /// # Panics
    ///
    /// Panics if `min > max` (empty range). The config layer validates the
    /// range before a game starts.
    fn random_int(&self, min: i64, max: i64) -> Self::Comp<i64> {
        let rng = Arc::clone(&self.rng);
        Box::pin(async move {
            let mut rng = rng.lock().await;
            let value = rng.gen_range(min..=max);
            trace!(min, max, value, "drew secret");
            Ok(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_terminal(input: &'static [u8]) -> Terminal<BufReader<&'static [u8]>, Vec<u8>> {
        Terminal::with_rng(BufReader::new(input), Vec::new(), StdRng::seed_from_u64(0))
    }

    #[tokio::test]
    async fn test_write_line_appends_terminator() {
        let term = memory_terminal(b"");
        term.write_line("hello").await.unwrap();
        term.write_line("world").await.unwrap();

        let output = term.output();
        let bytes = output.lock().await;
        assert_eq!(&bytes[..], &b"hello\nworld\n"[..]);
    }

    #[tokio::test]
    async fn test_read_line_yields_raw_line() {
        let term = memory_terminal(b"  spaced  \nnext\n");
        assert_eq!(term.read_line().await.unwrap(), "  spaced  ");
        assert_eq!(term.read_line().await.unwrap(), "next");
    }

    #[tokio::test]
    async fn test_read_line_reports_closed_stream() {
        let term = memory_terminal(b"");
        let err = term.read_line().await.unwrap_err();
        assert!(matches!(err, GameError::InputClosed));
    }

    #[tokio::test]
    async fn test_seeded_rng_is_reproducible() {
        let a = memory_terminal(b"");
        let b = memory_terminal(b"");
        for _ in 0..16 {
            assert_eq!(
                a.random_int(1, 5).await.unwrap(),
                b.random_int(1, 5).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_random_int_stays_in_range() {
        let term = memory_terminal(b"");
        for _ in 0..64 {
            let value = term.random_int(1, 5).await.unwrap();
            assert!((1..=5).contains(&value), "out of range: {value}");
        }
    }
}
