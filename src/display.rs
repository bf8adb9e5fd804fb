//! 宿主显示面 (全屏能力)
//!
//! 全屏请求是尽力而为的：调用方记录失败后忽略，不影响电视模式本身

use std::io::{self, Write};

use crossterm::{QueueableCommand, style::Print};

/// 宿主提供的全屏能力
pub trait DisplaySurface {
    fn request_fullscreen(&mut self) -> io::Result<()>;
    fn release_fullscreen(&mut self) -> io::Result<()>;
    fn is_fullscreen(&self) -> bool;
}

// xterm 窗口操作序列: CSI 10;1 t 进入全屏, CSI 10;0 t 退出
const ENTER_FULLSCREEN: &str = "\x1b[10;1t";
const LEAVE_FULLSCREEN: &str = "\x1b[10;0t";

/// 通过转义序列请求终端窗口全屏，不支持的终端会忽略该序列
pub struct TerminalSurface<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, active: false }
    }

    fn send(&mut self, sequence: &str) -> io::Result<()> {
        self.out.queue(Print(sequence))?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn request_fullscreen(&mut self) -> io::Result<()> {
        self.send(ENTER_FULLSCREEN)?;
        self.active = true;
        Ok(())
    }

    fn release_fullscreen(&mut self) -> io::Result<()> {
        if self.active {
            self.send(LEAVE_FULLSCREEN)?;
            self.active = false;
        }
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.active
    }
}

/// 始终保持窗口化的显示面（配置关闭全屏时使用），请求不做任何事
#[derive(Debug, Default)]
pub struct WindowedSurface;

impl DisplaySurface for WindowedSurface {
    fn request_fullscreen(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn release_fullscreen(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_terminal_surface_writes_sequences() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.release_fullscreen().unwrap();
        assert!(surface.out.is_empty());

        surface.request_fullscreen().unwrap();
        assert!(surface.is_fullscreen());
        surface.release_fullscreen().unwrap();
        assert!(!surface.is_fullscreen());

        let written = String::from_utf8(surface.out).unwrap();
        assert_eq!(written, format!("{ENTER_FULLSCREEN}{LEAVE_FULLSCREEN}"));
    }

    #[test]
    fn test_failed_request_is_not_held() {
        let mut surface = TerminalSurface::new(BrokenPipe);
        assert!(surface.request_fullscreen().is_err());
        assert!(!surface.is_fullscreen());
        assert!(surface.release_fullscreen().is_ok());
    }

    #[test]
    fn test_windowed_surface() {
        let mut surface = WindowedSurface;
        assert!(surface.request_fullscreen().is_ok());
        assert!(!surface.is_fullscreen());
    }
}
