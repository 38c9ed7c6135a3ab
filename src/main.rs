fn main() -> anyhow::Result<()> {
    descriptor_schema::cli::CommandLineInterface::load().run()
}
