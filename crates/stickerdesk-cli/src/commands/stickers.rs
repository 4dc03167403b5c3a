//! Sticker list commands. Every command here sits behind the route guard.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use stickerdesk_application::StickerListController;
use stickerdesk_infrastructure::read_upload_file;

use super::context::AppContext;

pub async fn list(ctx: &AppContext, page: usize) -> Result<()> {
    let session = ctx.require_session()?;
    let controller = ctx.sticker_controller(&session)?;

    controller.fetch_all().await?;
    controller.set_page(page).await;
    render_page(&controller).await;
    Ok(())
}

pub async fn upload(ctx: &AppContext, file: Option<&Path>, code: &str) -> Result<()> {
    let session = ctx.require_session()?;
    let controller = ctx.sticker_controller(&session)?;

    let file = file.map(read_upload_file).transpose()?;
    controller.upload(file, code).await?;
    render_page(&controller).await;
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: &str, page: usize) -> Result<()> {
    let session = ctx.require_session()?;
    let controller = ctx.sticker_controller(&session)?;

    controller.fetch_all().await?;
    controller.set_page(page).await;
    controller.delete(id).await?;
    render_page(&controller).await;
    Ok(())
}

async fn render_page(controller: &StickerListController) {
    if controller.is_empty().await {
        println!("No stickers yet.");
    }

    let first = controller.first_row_number().await;
    for (offset, record) in controller.current_page_view().await.iter().enumerate() {
        println!(
            "{:>4}. {} {}",
            first + offset,
            format!("{:<20}", record.code).bold(),
            record.id.dimmed()
        );
        println!("      {}", controller.image_url(record).cyan());
    }

    let page = controller.page().await;
    let mut nav = format!("Page {} of {}", page, controller.total_pages().await);
    if controller.has_previous().await {
        nav.push_str(&format!("  previous: --page {}", page - 1));
    }
    if controller.has_next().await {
        nav.push_str(&format!("  next: --page {}", page + 1));
    }
    println!("{}", nav.dimmed());
}
