//! Features - One Slice per Mini-App Page

pub mod calculator;
pub mod ticket;
