fn main() -> anyhow::Result<()> {
    placemark_lib::run()
}
