//! Terminal presentation helpers shared by the commands.
//!
//! | Module     | Provides                                           |
//! |------------|----------------------------------------------------|
//! | `badges`   | status and severity colouring                      |
//! | `charts`   | heatmap, trend bars and compliance ring as text    |
//! | `icons`    | `console::Emoji` constants                         |
//! | `panels`   | section headings, stat cards and detail panels     |

pub mod badges;
pub mod charts;
pub mod icons;
pub mod panels;
