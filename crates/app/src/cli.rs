// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use workroom_domain::{EstimateBucket, Period, PriorityFilter, TaskFilter};

/// Workroom - validate form drafts and browse the mock workspace
#[derive(Parser, Debug)]
#[command(name = "workroom", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Gateway configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the simulated gateway latency
    #[arg(long, global = true)]
    pub instant: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a form draft stored as JSON
    #[command(visible_alias = "v")]
    Validate {
        /// Which form the draft belongs to
        form: FormKind,

        /// Path to the draft
        file: PathBuf,

        /// Sign-up step to validate (1-4)
        #[arg(long, default_value_t = 1)]
        step: u8,

        /// Remaining vacation balance for add-request drafts
        #[arg(long, default_value_t = 0)]
        vacation_days_left: u32,
    },

    /// List tasks matching the filter, grouped by board column
    #[command(visible_alias = "t")]
    Tasks(TaskArgs),

    /// Search conversations by title and last message
    #[command(visible_alias = "c")]
    Conversations {
        /// Text to look for; empty lists every conversation
        #[arg(long, default_value = "")]
        query: String,
    },
}

/// Forms the `validate` command understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormKind {
    SignIn,
    SignUp,
    AddEvent,
    AddProject,
    AddTask,
    TimeLog,
    AddEmployee,
    ShareFolder,
    AddRequest,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct TaskArgs {
    /// Only tasks of this project
    #[arg(long)]
    pub project: Option<String>,

    /// Keep tasks in this group (repeatable)
    #[arg(long = "group")]
    pub groups: Vec<String>,

    /// Keep tasks reported by this member (repeatable)
    #[arg(long = "reporter")]
    pub reporters: Vec<String>,

    /// Keep tasks assigned to this member (repeatable)
    #[arg(long = "assignee")]
    pub assignees: Vec<String>,

    /// `all`, `low`, `medium` or `high`
    #[arg(long, default_value = "all")]
    pub priority: PriorityFilter,

    /// `8h`, `1-2d` or `3d+`
    #[arg(long)]
    pub estimate: Option<EstimateBucket>,

    /// `all`, `today`, `week` or `month`
    #[arg(long, default_value = "all")]
    pub period: Period,
}

impl TaskArgs {
    pub fn to_filter(&self) -> TaskFilter {
        TaskFilter {
            task_group_ids: self.groups.clone(),
            reporter_ids: self.reporters.clone(),
            assignee_ids: self.assignees.clone(),
            priority: self.priority,
            estimate: self.estimate,
            period: self.period,
        }
    }
}
