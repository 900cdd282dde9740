// Control logic for a three-wheeled omnidirectional base
//
// Three programs share this crate:
// - controller: calibrates three rotary axes, derives a velocity intent and
//   wheel speeds each cycle, sends them as one text line over the link
// - drive: receives lines, decodes wheel speeds, commands the motors
// - remote: maps discrete button presses to fixed preset maneuvers

pub mod config;
pub mod controller;
pub mod drive;
pub mod link;
pub mod messages;
pub mod motion;
pub mod motor;
pub mod remote;
pub mod sim;
