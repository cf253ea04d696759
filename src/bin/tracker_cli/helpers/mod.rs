// ABOUTME: Console helpers for the tracker CLI
// ABOUTME: Output formatting for views and durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Project

pub mod display;
