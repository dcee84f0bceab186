//! Command handlers.
//!
//! [`Cli`] owns the planner and the renderer, runs one command against the
//! planner and renders the markdown produced by [`crate::display`].

use anyhow::{bail, Context, Result};
use jiff::civil::Date;
use lectio_core::{Book, ChapterRef, CreatePlan, Planner};
use log::debug;

use crate::{
    args::{ChapterArgs, ConfirmArgs, PlanCommands, ShowPlanArgs, StatusArgs},
    display::{chapter_label, BookStatusView, PlanTypesView, PlanView, ProgressView, TodayView},
    renderer::TerminalRenderer,
};

const NO_PLAN: &str = "No reading plan. Create one with `lectio plan create`.\n";

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    today: Date,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, today: Date) -> Self {
        Self {
            planner,
            renderer,
            today,
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(args.into()).await,
            PlanCommands::Show(args) => self.show_plan(args).await,
            PlanCommands::Delete(args) => self.delete_plan(args).await,
            PlanCommands::Types => self
                .renderer
                .render(&PlanTypesView {
                    catalog: self.planner.catalog(),
                }
                .to_string()),
        }
    }

    async fn create_plan(&self, params: CreatePlan) -> Result<()> {
        let plan = self
            .planner
            .create_plan(&params)
            .await
            .context("Failed to create plan")?;

        let view = PlanView {
            plan: &plan,
            catalog: self.planner.catalog(),
            show_all: false,
        };
        self.renderer.render(&format!(
            "Created {} plan from {} to {}\n\n{view}",
            plan.plan_type(),
            plan.start_date(),
            plan.end_date()
        ))
    }

    async fn show_plan(&self, args: ShowPlanArgs) -> Result<()> {
        let Some(plan) = self.planner.find_plan().await.context("Failed to load plan")? else {
            return self.renderer.render(NO_PLAN);
        };

        let view = PlanView {
            plan: &plan,
            catalog: self.planner.catalog(),
            show_all: args.all,
        };
        self.renderer.render(&view.to_string())
    }

    async fn delete_plan(&self, args: ConfirmArgs) -> Result<()> {
        if !args.confirm {
            bail!("Deleting the plan requires --confirm");
        }

        let deleted = self
            .planner
            .delete_plan()
            .await
            .context("Failed to delete plan")?;
        if deleted {
            self.renderer
                .render("Deleted reading plan. Read status was kept.\n")
        } else {
            self.renderer.render("No reading plan to delete.\n")
        }
    }

    pub async fn show_today(&self) -> Result<()> {
        let Some(plan) = self.planner.find_plan().await.context("Failed to load plan")? else {
            return self.renderer.render(NO_PLAN);
        };

        let chapters = self
            .planner
            .today(self.today)
            .await
            .context("Failed to load today's reading")?;

        let view = TodayView {
            date: self.today,
            plan: &plan,
            chapters: &chapters,
            catalog: self.planner.catalog(),
        };
        self.renderer.render(&view.to_string())
    }

    pub async fn set_read(&self, args: ChapterArgs, is_read: bool) -> Result<()> {
        let book = self.resolve_book(&args.book)?;
        let chapter = ChapterRef::new(book.index, args.chapter);
        let label = chapter_label(self.planner.catalog(), chapter);

        let updated = if is_read {
            self.planner.mark_read(chapter).await
        } else {
            self.planner.mark_unread(chapter).await
        };
        updated.with_context(|| format!("Failed to update {label}"))?;

        debug!("Updated read status of {label}");
        self.renderer.render(&format!(
            "Marked {label} as {}.\n",
            if is_read { "read" } else { "unread" }
        ))
    }

    pub async fn show_status(&self, args: StatusArgs) -> Result<()> {
        let book = self.resolve_book(&args.book)?;

        if let Some(chapter) = args.chapter {
            let chapter = ChapterRef::new(book.index, chapter);
            if !self.planner.catalog().contains(chapter) {
                bail!("{} has no chapter {}", book.name, chapter.chapter);
            }
            let status = self
                .planner
                .chapter_status(chapter, self.today)
                .await
                .context("Failed to load chapter status")?;
            return self.renderer.render(&format!(
                "{}: {}\n",
                chapter_label(self.planner.catalog(), chapter),
                status.as_str()
            ));
        }

        let statuses = self
            .planner
            .book_statuses(book.index, self.today)
            .await
            .context("Failed to load book status")?;
        let view = BookStatusView {
            book_name: &book.name,
            statuses: &statuses,
        };
        self.renderer.render(&view.to_string())
    }

    pub async fn show_progress(&self) -> Result<()> {
        if self
            .planner
            .find_plan()
            .await
            .context("Failed to load plan")?
            .is_none()
        {
            return self.renderer.render(NO_PLAN);
        }

        let statistics = self
            .planner
            .statistics(self.today)
            .await
            .context("Failed to compute progress")?;
        self.renderer.render(
            &ProgressView {
                statistics: &statistics,
            }
            .to_string(),
        )
    }

    pub async fn reset(&self, args: ConfirmArgs) -> Result<()> {
        if !args.confirm {
            bail!("Clearing read status requires --confirm");
        }

        let cleared = self
            .planner
            .read_statuses()
            .await
            .context("Failed to load read status")?
            .iter()
            .filter(|status| status.is_read)
            .count();
        self.planner
            .clear_read_status()
            .await
            .context("Failed to clear read status")?;

        self.renderer.render(&format!(
            "Cleared read status ({cleared} chapters were marked read).\n"
        ))
    }

    fn resolve_book(&self, query: &str) -> Result<Book> {
        self.planner
            .catalog()
            .find_book(query)
            .cloned()
            .with_context(|| format!("Unknown book: {query}"))
    }
}
