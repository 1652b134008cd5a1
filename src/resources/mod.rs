//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the LCD model, the frame clock and
//! its tick requests, configuration and rendering handles.
//!
//! Overview
//! - `appconfig` – INI-backed window, scale and color settings
//! - `debugmode` – presence toggles the debug overlay
//! - `frameclock` – current frame index and tick count
//! - `lastresolution` – pose drawn by the latest tick
//! - `lcdgeometry` – cell grid dimensions and pixel scale
//! - `palette` – foreground and background colors
//! - `pixelsurface` – monochrome drawing surface and the `Surface` trait
//! - `rendertarget` – GPU texture the surface is copied into
//! - `spritecatalog` – the seven 5×8 glyph bitmaps
//! - `tickscheduler` – pending "run a tick on next refresh" request
//! - `timeline` – cycle length and jump window constants
//! - `windowsize` – actual window dimensions for letterboxing
pub mod appconfig;
pub mod debugmode;
pub mod frameclock;
pub mod lastresolution;
pub mod lcdgeometry;
pub mod palette;
pub mod pixelsurface;
pub mod rendertarget;
pub mod spritecatalog;
pub mod tickscheduler;
pub mod timeline;
pub mod windowsize;
